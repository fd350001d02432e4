//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token verification for the profile routes, plus the
//!   `CurrentUser` extractor that turns verified claims into a stored user
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use palabrator::backend::middleware::auth_middleware;
//! use palabrator::backend::AppState;
//!
//! # fn example(state: AppState) {
//! let protected: Router<AppState> = Router::new()
//!     .route("/profiles", get(|| async { "ok" }))
//!     .route_layer(middleware::from_fn_with_state(state, auth_middleware));
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, CurrentUser};
