/**
 * Rename Profile Handler
 *
 * PUT /profiles with the full profile `{id, owner, name}`; `name` is the new
 * name. The update filters on `{id, owner}` with the owner taken from the
 * verified user.
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
use crate::backend::store::StoreError;

const NAME_TAKEN: &str = "This profile name already exists";
const UPDATE_FAILED: &str = "Failed to update the profile";

/// Rename handler
///
/// # Errors
///
/// * `400 Bad Request` - Body missing or malformed, blank name, or the
///   caller already has a profile with the new name
/// * `401 Unauthorized` - The body's `owner` is not the caller
/// * `404` / `422` - Identity could not be resolved
/// * `422 Unprocessable Entity` - No profile matched `{id, owner}` or the
///   update failed
pub async fn rename_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<Profile>, JsonRejection>,
) -> Result<Json<Profile>, BackendError> {
    let Json(mut profile) = payload.map_err(|e| {
        tracing::warn!("Rejected profile rename body: {}", e);
        BackendError::validation("Profile is not present in body")
    })?;

    ensure_owner(&profile, &user)?;

    profile.name = profile.name.trim().to_string();
    if profile.name.is_empty() {
        return Err(BackendError::validation("Profile name is not present in body"));
    }

    if state.store.profile_exists(user.id, &profile.name).await? {
        tracing::warn!("Profile name {:?} already taken for {}", profile.name, user.id);
        return Err(BackendError::conflict(NAME_TAKEN));
    }

    let changed = state
        .store
        .rename_profile(profile.id, user.id, &profile.name)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => BackendError::conflict(NAME_TAKEN),
            other => {
                tracing::error!("Failed to rename profile {}: {}", profile.id, other);
                BackendError::persistence(StatusCode::UNPROCESSABLE_ENTITY, UPDATE_FAILED)
            }
        })?;

    if changed == 0 {
        tracing::warn!("No profile {} owned by {} to rename", profile.id, user.id);
        return Err(BackendError::persistence(StatusCode::UNPROCESSABLE_ENTITY, UPDATE_FAILED));
    }

    tracing::info!("Renamed profile {} for {}", profile.id, user.id);
    Ok(Json(profile))
}
