/**
 * Password Hashing
 *
 * Hashing and verification both run on tokio's blocking pool, never on
 * the request task.
 */

use thiserror::Error;
use tokio::task::JoinError;

/// bcrypt work factor for new hashes
pub const PASSWORD_HASH_COST: u32 = 12;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Join(#[from] JoinError),
}

/// Hash a plaintext password at `PASSWORD_HASH_COST`
pub async fn hash_password(password: String) -> Result<String, PasswordError> {
    hash_password_with_cost(password, PASSWORD_HASH_COST).await
}

pub async fn hash_password_with_cost(password: String, cost: u32) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Compare a plaintext password against a stored hash
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await?;

    match outcome {
        Ok(valid) => Ok(valid),
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            Ok(false)
        }
    }
}
