/**
 * Authentication Handler Types
 *
 * Request bodies accepted by signup and login. Both handlers answer with
 * `shared::AuthResponse`.
 */

use serde::{Deserialize, Serialize};

use crate::shared::SharedError;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    /// User's first name
    pub name: String,
    /// User's last name
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// User's email address (lower-cased before storage)
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

impl SignupRequest {
    /// Field checks that run before touching the store
    pub fn validate(&self) -> Result<(), SharedError> {
        if !self.email.contains('@') {
            return Err(SharedError::validation("email", "Invalid email format"));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Password must not be empty"));
        }
        Ok(())
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    /// Verified against the stored hash, never stored or logged
    pub password: String,
}
