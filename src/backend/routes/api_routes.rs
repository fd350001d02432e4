/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /auth/signup` - User registration
 * - `POST /auth/login` - User login
 *
 * ## Profiles (bearer token required)
 * - `GET /profiles` - List the caller's profiles
 * - `POST /profiles` - Create a profile
 * - `PUT /profiles` - Rename a profile
 * - `DELETE /profiles` - Delete a profile
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::profiles::{create_profile, delete_profile, list_profiles, rename_profile};
use crate::backend::server::state::AppState;

/// Configure the public authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

/// Configure the profile routes behind the auth middleware
///
/// The middleware is attached with `route_layer`, so it only runs for
/// requests that match a profile route; unknown paths still reach the
/// fallback.
pub fn configure_profile_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let profiles = Router::new()
        .route(
            "/profiles",
            get(list_profiles)
                .post(create_profile)
                .put(rename_profile)
                .delete(delete_profile),
        )
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    router.merge(profiles)
}
