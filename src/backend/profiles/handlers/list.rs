/**
 * List Profiles Handler
 *
 * GET /profiles?page=&limit=
 *
 * Answers `{count, list}` where `count` is the caller's total number of
 * profiles and `list` is the requested page, oldest first.
 */

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::profiles::types::{Page, PageQuery, Profile};
use crate::backend::server::AppState;
use crate::shared::PaginationResult;

/// List handler
///
/// # Errors
///
/// * `400 Bad Request` - Query string does not parse
/// * `404` / `422` - Identity could not be resolved
/// * `500 Internal Server Error` - Store failure
pub async fn list_profiles(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PaginationResult<Profile>>, BackendError> {
    let Query(query) = query.map_err(|e| {
        tracing::warn!("Rejected profile list query: {}", e);
        BackendError::validation("Invalid pagination parameters")
    })?;
    let page = Page::from(query);

    let result = state.store.find_profiles(user.id, page).await?;
    tracing::debug!(
        "Listed {} of {} profiles for {} (page {}, limit {})",
        result.list.len(),
        result.count,
        user.id,
        page.page(),
        page.limit()
    );

    Ok(Json(result))
}
