/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers return it directly.
 * The body is always `{"message": "..."}`. Token rejections also carry a
 * `WWW-Authenticate: Bearer realm="..."` challenge.
 *
 * Store and password-hashing failures that a handler does not map
 * explicitly become a generic 500 here; the underlying error is logged,
 * never sent to the client.
 */

use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use crate::backend::auth::password::PasswordError;
use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;
use crate::shared::FailedRequestResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(FailedRequestResponse::new(self.message()));

        if let Self::InvalidToken { realm, .. } = &self {
            if let Ok(challenge) = HeaderValue::from_str(&format!("Bearer realm=\"{}\"", realm)) {
                return (status, [(WWW_AUTHENTICATE, challenge)], body).into_response();
            }
        }

        (status, body).into_response()
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Store error: {}", err);
        BackendError::persistence(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to process the request",
        )
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        tracing::error!("Password check failed: {}", err);
        BackendError::internal("Failed to process the request")
    }
}
