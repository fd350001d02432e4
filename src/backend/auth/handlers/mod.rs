//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the public authentication
//! endpoints.
//!
//! # Handlers
//!
//! - **`signup`** - POST /auth/signup - User registration (201)
//! - **`login`** - POST /auth/login - User authentication (200)
//!
//! Both answer `{"email": ..., "token": ...}` on success and
//! `{"message": ...}` on failure.
//!
//! # Example
//!
//! ```rust,no_run
//! use palabrator::backend::auth::handlers::{signup, login};
//! use palabrator::backend::AppState;
//! use axum::{routing::post, Router};
//!
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route("/auth/signup", post(signup))
//!     .route("/auth/login", post(login))
//!     .with_state(state);
//! # }
//! ```

/// Request types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

pub use types::{LoginRequest, SignupRequest};
pub use signup::signup;
pub use login::login;
