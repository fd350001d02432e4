//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and its
//! conversion into a response.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` and its constructors
//! - **`conversion`** - `IntoResponse` and conversions from lower-level errors
//!
//! # Status Mapping
//!
//! | Variant | Status |
//! |---|---|
//! | `ValidationError` | 400 |
//! | `ConflictError` | 400 |
//! | `AuthenticationError` | 400 |
//! | `AuthorizationError` | 401 |
//! | `InvalidToken` | 401 (with `WWW-Authenticate`) |
//! | `MissingClaimError` | 422 |
//! | `NotFoundError` | 404 |
//! | `PersistenceError` | carried status (500 or 422) |
//! | `TokenCreationError` | 500 |
//! | `InternalError` | 500 |
//!
//! Bad credentials answer 400, not 401.
//!
//! # Response Format
//!
//! ```json
//! { "message": "Invalid Credentials" }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
