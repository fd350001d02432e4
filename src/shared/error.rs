//! Shared Error Types
//!
//! This module defines the errors raised while checking request payloads
//! before any store access happens.
//!
//! Malformed JSON never reaches this type: body rejections are mapped to
//! `BackendError::validation` at the handler. `SharedError` covers fields
//! that parsed but hold an unusable value.
//!
//! # Usage
//!
//! ```rust
//! use palabrator::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! ```
use thiserror::Error;

/// Errors raised while validating inbound payloads
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Message suitable for a response body (no field prefix)
    pub fn client_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
