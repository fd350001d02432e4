/**
 * Server Configuration
 *
 * This module turns `AppConfig` into the services the server runs on,
 * chiefly the optional PostgreSQL connection.
 *
 * # Error Handling
 *
 * No database URL means the in-memory store is used, with a warning. A URL
 * that is set but cannot be connected to, or whose migrations fail, aborts
 * startup.
 */

use std::time::Duration;

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::shared::AppConfig;

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Failures that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to connect to the database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Connect to PostgreSQL and run migrations
///
/// # Returns
///
/// - `Ok(Some(PgPool))` if a database URL is configured and ready
/// - `Ok(None)` if no database URL is configured
///
/// # Errors
///
/// `StartupError` if the connection or the migrations fail.
pub async fn load_database(config: &AppConfig) -> Result<Option<PgPool>, StartupError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory store; data will not persist.");
        return Ok(None);
    };

    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            StartupError::Connect(e)
        })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        StartupError::from(e)
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(Some(pool))
}
