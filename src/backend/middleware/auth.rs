/**
 * Authentication Middleware
 *
 * This module protects the profile routes. The middleware verifies the
 * bearer token and stores its claims in the request extensions; the
 * `CurrentUser` extractor then resolves those claims to a stored user.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::identity::resolve_identity;
use crate::backend::auth::sessions::{Claims, TokenService};
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::store::Store;
use crate::shared::AppConfig;

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Verifies signature, issuer, audience, expiry and not-before
/// 3. Attaches the verified `Claims` to the request extensions
///
/// Any failure answers 401 with a `WWW-Authenticate` challenge for the
/// configured realm.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    State(config): State<Arc<AppConfig>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let realm = config.jwt_realm.as_str();

    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::invalid_token(realm, "Missing bearer token")
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e.kind());
        BackendError::invalid_token(realm, "Invalid or expired token")
    })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Token part of an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Axum extractor for the acting user
///
/// Reads the claims left by `auth_middleware` and re-resolves the user by
/// their email claim. Rejects with 422 when the claim is missing and 404 when
/// the user no longer exists.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    Arc<dyn Store>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let store = Arc::<dyn Store>::from_ref(state);
        let claims = parts.extensions.get::<Claims>();
        let user = resolve_identity(store.as_ref(), claims).await?;

        Ok(CurrentUser(user))
    }
}
