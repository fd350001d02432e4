/**
 * Delete Profile Handler
 *
 * DELETE /profiles with the full profile `{id, owner, name}`. Answers 204
 * with no body.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::profiles::handlers::ensure_owner;
use crate::backend::profiles::types::Profile;
use crate::backend::server::AppState;

const DELETE_FAILED: &str = "Failed to delete the profile";

/// Delete handler
///
/// # Errors
///
/// * `400 Bad Request` - Body missing or malformed
/// * `401 Unauthorized` - The body's `owner` is not the caller
/// * `404` / `422` - Identity could not be resolved
/// * `422 Unprocessable Entity` - No profile matched `{id, owner}` or the
///   delete failed
pub async fn delete_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<Profile>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Json(profile) = payload.map_err(|e| {
        tracing::warn!("Rejected profile delete body: {}", e);
        BackendError::validation("Profile is not present in body")
    })?;

    ensure_owner(&profile, &user)?;

    let removed = state
        .store
        .delete_profile(profile.id, user.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete profile {}: {}", profile.id, e);
            BackendError::persistence(StatusCode::UNPROCESSABLE_ENTITY, DELETE_FAILED)
        })?;

    match removed {
        0 => {
            tracing::warn!("No profile {} owned by {} to delete", profile.id, user.id);
            Err(BackendError::persistence(StatusCode::UNPROCESSABLE_ENTITY, DELETE_FAILED))
        }
        1 => {
            tracing::info!("Deleted profile {} for {}", profile.id, user.id);
            Ok(StatusCode::NO_CONTENT)
        }
        n => {
            tracing::warn!("Deleting profile {} removed {} rows", profile.id, n);
            Ok(StatusCode::NO_CONTENT)
        }
    }
}
