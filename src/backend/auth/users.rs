/**
 * User Model
 *
 * Users are created on signup and never mutated afterwards. Emails are
 * stored lower-cased; every lookup goes through `normalize_email` first.
 */

use chrono::{DateTime, Utc};

/// User record as stored
///
/// Not serializable: the password hash must never reach a response.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// First name
    pub name: String,
    /// Last name
    pub last_name: String,
    /// Lower-cased email address, unique
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when inserting a user; the store assigns id and timestamp
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Canonical form of an email for storage and lookup
///
/// # Example
///
/// ```rust
/// use palabrator::backend::auth::users::normalize_email;
///
/// assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
