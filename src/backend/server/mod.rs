//! Server Module
//!
//! This module contains the server-side code for initializing and
//! configuring the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`config`** - Database loading and startup errors
//! - **`init`** - App creation and the graceful-shutdown trigger
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database connection and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig` is loaded by the binary and passed in
//! 2. **Store Selection**: Postgres if `DATABASE_URL` is set, memory otherwise
//! 3. **State Creation**: Store, token service and config go into `AppState`
//! 4. **Router Creation**: Routes and middleware are configured
//!
//! # Example
//!
//! ```rust,no_run
//! use palabrator::backend::server::create_app;
//! use palabrator::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use state::AppState;
pub use config::StartupError;
pub use init::{create_app, shutdown_on};
