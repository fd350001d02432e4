//! Shared Module
//!
//! This module contains the types that cross the HTTP boundary and the
//! configuration loaded at startup. Everything here is plain data: no
//! database handles, no Axum types.
//!
//! # Overview
//!
//! - **`responses`** - JSON response bodies (`AuthResponse`, `FailedRequestResponse`,
//!   `PaginationResult`)
//! - **`error`** - Payload validation errors
//! - **`config`** - `AppConfig`, its builder and environment loading

/// Response payloads
pub mod responses;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use responses::{AuthResponse, FailedRequestResponse, PaginationResult};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Environment};
