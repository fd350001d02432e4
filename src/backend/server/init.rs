/**
 * Server Initialization
 *
 * This module builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Load the database, if one is configured
 * 2. Pick the store: Postgres when a pool exists, memory otherwise
 * 3. Build `AppState` (store, token service, config)
 * 4. Create and configure the router
 */

use std::future::Future;
use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, StartupError};
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, Store};
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only when a configured database cannot be connected to or
/// migrated.
pub async fn create_app(config: AppConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing Palabrator backend ({:?})", config.environment);

    let store: Arc<dyn Store> = match load_database(&config).await? {
        Some(pool) => Arc::new(PgStore::new(pool)),
        None => Arc::new(MemoryStore::new()),
    };

    let app_state = AppState::new(store, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}

/// Graceful-shutdown trigger for `axum::serve`
///
/// Resolves once `signal` does. If the signal listener itself fails the
/// error is logged and the future stays pending, so the server keeps
/// running instead of shutting down straight after it starts.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
