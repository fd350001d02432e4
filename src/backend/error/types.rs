/**
 * Backend Error Types
 *
 * Every handler returns `Result<_, BackendError>`. Each variant fixes the
 * status code it maps to, except `PersistenceError`, which carries one:
 * a failed profile create is a 500 while a failed rename or delete is a 422.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use palabrator::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::conflict("The User Already Exists");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or missing request body or query
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message
        message: String,
    },

    /// Duplicate email or profile name
    #[error("Conflict: {message}")]
    ConflictError {
        message: String,
    },

    /// Bad credentials on login
    #[error("Authentication failed: {message}")]
    AuthenticationError {
        message: String,
    },

    /// The caller does not own the resource
    #[error("Not authorized: {message}")]
    AuthorizationError {
        message: String,
    },

    /// Missing, malformed or unverifiable bearer token
    #[error("Invalid token: {message}")]
    InvalidToken {
        /// Realm announced in the `WWW-Authenticate` challenge
        realm: String,
        message: String,
    },

    /// The verified token has no usable `email` claim
    #[error("Missing claim: {message}")]
    MissingClaimError {
        message: String,
    },

    /// The token's user no longer exists
    #[error("Not found: {message}")]
    NotFoundError {
        message: String,
    },

    /// A store operation failed or was not applied
    #[error("Persistence error: {message}")]
    PersistenceError {
        /// HTTP status code for this error
        status: StatusCode,
        message: String,
    },

    /// The token signer failed
    #[error("Token creation error: {message}")]
    TokenCreationError {
        message: String,
    },

    /// A server-side step unrelated to storage or tokens failed
    #[error("Internal error: {message}")]
    InternalError {
        message: String,
    },

    /// Payload validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConflictError {
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::AuthenticationError {
            message: message.into(),
        }
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::AuthorizationError {
            message: message.into(),
        }
    }

    pub fn invalid_token(realm: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidToken {
            realm: realm.into(),
            message: message.into(),
        }
    }

    pub fn missing_claim(message: impl Into<String>) -> Self {
        Self::MissingClaimError {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundError {
            message: message.into(),
        }
    }

    /// Create a persistence error with an explicit status code
    ///
    /// # Example
    ///
    /// ```rust
    /// use palabrator::backend::error::BackendError;
    /// use axum::http::StatusCode;
    ///
    /// let err = BackendError::persistence(StatusCode::UNPROCESSABLE_ENTITY, "Failed to update the profile");
    /// assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    /// ```
    pub fn persistence(status: StatusCode, message: impl Into<String>) -> Self {
        Self::PersistenceError {
            status,
            message: message.into(),
        }
    }

    pub fn token_creation(message: impl Into<String>) -> Self {
        Self::TokenCreationError {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::ConflictError { .. } => StatusCode::BAD_REQUEST,
            Self::AuthenticationError { .. } => StatusCode::BAD_REQUEST,
            Self::AuthorizationError { .. } => StatusCode::UNAUTHORIZED,
            Self::InvalidToken { .. } => StatusCode::UNAUTHORIZED,
            Self::MissingClaimError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFoundError { .. } => StatusCode::NOT_FOUND,
            Self::PersistenceError { status, .. } => *status,
            Self::TokenCreationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message placed in the response body
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message }
            | Self::ConflictError { message }
            | Self::AuthenticationError { message }
            | Self::AuthorizationError { message }
            | Self::InvalidToken { message, .. }
            | Self::MissingClaimError { message }
            | Self::NotFoundError { message }
            | Self::PersistenceError { message, .. }
            | Self::TokenCreationError { message }
            | Self::InternalError { message } => message.clone(),
            Self::SharedError(err) => err.client_message().to_string(),
        }
    }
}
