//! Response payloads returned by the HTTP API.

use serde::{Deserialize, Serialize};

/// Returned by signup and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The lower-cased email the token was issued for
    pub email: String,
    /// Signed bearer token
    pub token: String,
}

/// Uniform error body. Every failed request answers with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRequestResponse {
    pub message: String,
}

impl FailedRequestResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResult<T> {
    /// Total number of matching records, not just the ones in `list`
    pub count: u64,
    pub list: Vec<T>,
}

impl<T> PaginationResult<T> {
    pub fn new(count: u64, list: Vec<T>) -> Self {
        Self { count, list }
    }
}
