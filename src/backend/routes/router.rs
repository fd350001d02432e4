/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router and wraps it in the
 * HTTP middleware stack.
 *
 * # Middleware
 *
 * Outermost first:
 * 1. CORS (development only): mirrors the request origin, allows credentials
 * 2. Request tracing
 * 3. Response compression (gzip, deflate)
 * 4. `X-Engine: axum` default response header
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_auth_routes, configure_profile_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `POST /auth/signup`, `POST /auth/login` - public
/// - `GET|POST|PUT|DELETE /profiles` - bearer token required
///
/// ## Fallback
///
/// Unknown routes answer 404 with the usual `{"message": ...}` body.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new());
    let router = configure_profile_routes(router, app_state.clone());

    let router = router
        .fallback(|| async { BackendError::not_found("Not Found") })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new().gzip(true).deflate(true))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-engine"),
                    HeaderValue::from_static("axum"),
                )),
        );

    let router = if app_state.config.environment.is_development() {
        tracing::debug!("CORS enabled for development");
        router.layer(development_cors())
    } else {
        router
    };

    router.with_state(app_state)
}

/// Permissive CORS for local frontends
fn development_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::OPTIONS,
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}
