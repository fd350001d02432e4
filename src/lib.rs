//! Palabrator - Main Library
//!
//! Palabrator is a small authentication and profile management backend built
//! with Axum. Users sign up or log in and receive a signed bearer token, then
//! manage a per-user collection of named profiles with that token.
//!
//! # Overview
//!
//! This library provides:
//! - Signup and login endpoints issuing HS256 JWTs
//! - Authenticated CRUD over profiles, scoped to the token's user
//! - A PostgreSQL store (via sqlx) and an in-memory store with the same contract
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, configuration and validation errors
//!   - `AuthResponse`, `FailedRequestResponse`, `PaginationResult`
//!   - `AppConfig` and its builder
//!   - `SharedError`
//!
//! - **`backend`** - Server-side code
//!   - Axum router, middleware and handlers
//!   - Token service and password hashing
//!   - Credential store adapters
//!
//! # Usage
//!
//! ```rust,no_run
//! use palabrator::backend::server::create_app;
//! use palabrator::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # HTTP Surface
//!
//! - `POST /auth/login` - exchange credentials for a token
//! - `POST /auth/signup` - register and receive a token
//! - `GET|POST|PUT|DELETE /profiles` - profile CRUD (bearer token required)
//!
//! # Error Handling
//!
//! Every failure is converted at the handler boundary into a JSON body of the
//! form `{"message": "..."}` with the matching status code. See
//! `backend::error` for the full taxonomy.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
