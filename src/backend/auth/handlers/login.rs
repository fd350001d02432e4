/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by lower-cased email
 * 2. Verify password using bcrypt
 * 3. Sign a token
 * 4. Return the email and token
 *
 * # Security
 *
 * - An unknown email and a wrong password produce the same 400 response
 * - Password verification is constant-time (via bcrypt)
 * - Passwords are never logged or returned
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::password::verify_password;
use crate::backend::auth::users::normalize_email;
use crate::backend::error::BackendError;
use crate::backend::server::AppState;
use crate::shared::AuthResponse;

const INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body ("Failed to receive credentials"),
///   unknown email or wrong password ("Invalid Credentials")
/// * `500 Internal Server Error` - Store lookup, bcrypt or token signing failed
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "email": "user@example.com",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected login body: {}", e);
        BackendError::validation("Failed to receive credentials")
    })?;

    let email = normalize_email(&request.email);
    tracing::info!("Login request for: {}", email);

    let user = state
        .store
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", email);
            BackendError::authentication(INVALID_CREDENTIALS)
        })?;

    let valid = verify_password(request.password, user.password_hash.clone()).await?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(BackendError::authentication(INVALID_CREDENTIALS));
    }

    let token = state.tokens.sign(&user.email).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::token_creation("Failed to create the session token")
    })?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(AuthResponse {
        email: user.email,
        token,
    }))
}
