//! Backend Module
//!
//! This module contains all server-side code for Palabrator: the Axum
//! router, request handlers, authentication middleware, token and password
//! handling, and the credential store adapters.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Signup/login handlers, token service, password hashing, identity
//! - **`profiles`** - Profile CRUD handlers and types
//! - **`store`** - Store traits with PostgreSQL and in-memory implementations
//! - **`middleware`** - Bearer token verification and identity extraction
//! - **`error`** - Backend error type and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── profiles/       - Profile management
//! ├── store/          - Persistence adapters
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. The auth middleware verifies the bearer token (profile routes only)
//! 2. The `CurrentUser` extractor re-resolves the token's email against the store
//! 3. The handler runs one store operation
//! 4. The outcome becomes a JSON body and status code
//!
//! # State Management
//!
//! `AppState` holds the store handle, the token service and the
//! configuration. It is built once at startup and cloned into each request;
//! nothing in it is mutated afterwards.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Profile management
pub mod profiles;

/// Credential and profile persistence
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::BackendError;
