/**
 * Create Profile Handler
 *
 * POST /profiles with `{"name": "..."}`. On success answers 201 with the
 * caller's first page of profiles.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::profiles::types::{CreateProfileRequest, Page, Profile};
use crate::backend::server::AppState;
use crate::backend::store::StoreError;
use crate::shared::PaginationResult;

const PROFILE_EXISTS: &str = "The Profile Already Exists";
const CREATE_FAILED: &str = "Failed to create the profile";

/// Create handler
///
/// # Errors
///
/// * `400 Bad Request` - Name missing or blank, or the caller already has a
///   profile with that name
/// * `404` / `422` - Identity could not be resolved
/// * `500 Internal Server Error` - The insert failed
pub async fn create_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PaginationResult<Profile>>), BackendError> {
    let name = payload
        .ok()
        .map(|Json(request)| request.name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Profile create without a name from {}", user.id);
            BackendError::validation("Profile name is not present in body")
        })?;

    if state.store.profile_exists(user.id, &name).await? {
        tracing::warn!("Profile {:?} already exists for {}", name, user.id);
        return Err(BackendError::conflict(PROFILE_EXISTS));
    }

    let profile = state
        .store
        .insert_profile(user.id, &name)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => BackendError::conflict(PROFILE_EXISTS),
            other => {
                tracing::error!("Failed to create profile: {}", other);
                BackendError::persistence(StatusCode::INTERNAL_SERVER_ERROR, CREATE_FAILED)
            }
        })?;

    tracing::info!("Created profile {} for {}", profile.id, user.id);

    let first_page = state.store.find_profiles(user.id, Page::first()).await?;
    Ok((StatusCode::CREATED, Json(first_page)))
}
