/**
 * Palabrator Server Entry Point
 *
 * Loads configuration from the environment (and `.env`), initializes
 * tracing, and serves the Axum app until Ctrl-C.
 */

use palabrator::backend::server::{create_app, shutdown_on};
use palabrator::shared::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    // RUST_LOG wins; otherwise verbosity follows the environment
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("Server initialization started: {:?}", config);
    if config.uses_development_secret() {
        tracing::warn!("JWT_SECRET not set; signing tokens with the development secret");
    }

    let port = config.port;
    let app = create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
