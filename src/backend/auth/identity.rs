/**
 * Identity Extraction
 *
 * Protected handlers act on behalf of the user named by the token's `email`
 * claim. The user is looked up again on every request; the token carries
 * identity, not a cached copy of the user.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::Claims;
use crate::backend::auth::users::{normalize_email, User};
use crate::backend::error::BackendError;
use crate::backend::store::{StoreError, UserStore};

#[derive(Debug, Error)]
pub enum IdentityError {
    /// No verified claims, or the `email` claim is absent or blank
    #[error("token carries no email claim")]
    MissingClaim,

    /// The claim names a user the store does not know
    #[error("no user for email claim")]
    UserNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolve the acting user from verified token claims
pub async fn resolve_identity<S>(store: &S, claims: Option<&Claims>) -> Result<User, IdentityError>
where
    S: UserStore + ?Sized,
{
    let email = claims
        .and_then(|claims| claims.email.as_deref())
        .map(normalize_email)
        .filter(|email| !email.is_empty())
        .ok_or(IdentityError::MissingClaim)?;

    store
        .find_user_by_email(&email)
        .await?
        .ok_or(IdentityError::UserNotFound)
}

impl From<IdentityError> for BackendError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::MissingClaim => {
                tracing::warn!("Verified token has no usable email claim");
                BackendError::missing_claim("Failed to get information from the jwt")
            }
            IdentityError::UserNotFound => {
                tracing::warn!("Token refers to a user that no longer exists");
                BackendError::not_found("Failed to get the user from the database")
            }
            IdentityError::Store(e) => {
                tracing::error!("Failed to resolve identity: {}", e);
                BackendError::persistence(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to get the user from the database",
                )
            }
        }
    }
}
