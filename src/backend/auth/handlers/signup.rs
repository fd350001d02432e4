/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password presence
 * 2. Check if a user with the lower-cased email already exists
 * 3. Hash password using bcrypt (cost 12)
 * 4. Create user in the store
 * 5. Sign a token and answer 201
 *
 * A concurrent signup that slips past the existence check is caught by the
 * store's unique constraint and answered exactly like the check.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{normalize_email, NewUser};
use crate::backend::error::BackendError;
use crate::backend::server::AppState;
use crate::backend::store::StoreError;
use crate::shared::AuthResponse;

const USER_EXISTS: &str = "The User Already Exists";
const CREATE_FAILED: &str = "Failed to create the user";

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body ("Failed to receive signup data"),
///   invalid email, empty password, or email already taken
///   ("The User Already Exists")
/// * `500 Internal Server Error` - Hashing, insert or token signing failed
///
/// # Example Request
///
/// ```http
/// POST /auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ana",
///   "lastName": "Lopez",
///   "email": "Ana@Example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response (201)
///
/// ```json
/// {
///   "email": "ana@example.com",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected signup body: {}", e);
        BackendError::validation("Failed to receive signup data")
    })?;

    request.validate().map_err(|e| {
        tracing::warn!("Signup validation failed: {}", e);
        BackendError::from(e)
    })?;

    let email = normalize_email(&request.email);
    tracing::info!("Signup request for: {}", email);

    if state.store.user_exists(&email).await? {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::conflict(USER_EXISTS));
    }

    let password_hash = hash_password(request.password).await.map_err(|e| {
        tracing::error!("Failed to hash password: {}", e);
        BackendError::persistence(StatusCode::INTERNAL_SERVER_ERROR, CREATE_FAILED)
    })?;

    let new_user = NewUser {
        name: request.name,
        last_name: request.last_name,
        email,
        password_hash,
    };

    let user = state.store.insert_user(new_user).await.map_err(|e| match e {
        StoreError::Conflict(constraint) => {
            tracing::warn!("Signup lost a race on {}", constraint);
            BackendError::conflict(USER_EXISTS)
        }
        other => {
            tracing::error!("Failed to create user: {}", other);
            BackendError::persistence(StatusCode::INTERNAL_SERVER_ERROR, CREATE_FAILED)
        }
    })?;

    let token = state.tokens.sign(&user.email).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::token_creation("Failed to create the session token")
    })?;

    tracing::info!("User created successfully: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            email: user.email,
            token,
        }),
    ))
}
