//! Store Module
//!
//! The credential store persists users and profiles. Handlers only see the
//! `UserStore` and `ProfileStore` traits; the concrete adapter is chosen at
//! startup.
//!
//! # Implementations
//!
//! - **`postgres`** - `PgStore`, backed by a sqlx `PgPool`
//! - **`memory`** - `MemoryStore`, process-local tables used when no
//!   database is configured and in tests
//!
//! # Uniqueness
//!
//! Both adapters enforce the same constraints: `users.email` is unique, and
//! `profiles (owner, name)` is unique. A violation surfaces as
//! `StoreError::Conflict`, which closes the gap between a handler's
//! existence check and its insert.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::profiles::types::{Page, Profile};
use crate::shared::PaginationResult;

/// PostgreSQL adapter
pub mod postgres;

/// In-memory adapter
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("unique constraint violated: {0}")]
    Conflict(String),

    /// The database failed to execute the statement
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return Self::Conflict(constraint);
            }
        }
        Self::Database(err)
    }
}

/// User persistence
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by (already normalized) email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Check whether any user holds this email
    async fn user_exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Insert a user. Fails with `StoreError::Conflict` if the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;
}

/// Profile persistence
///
/// Every mutating call takes the owner as part of its filter; the owner
/// always comes from the verified identity, never from a request body.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Check whether `owner` already has a profile called `name`
    async fn profile_exists(&self, owner: Uuid, name: &str) -> Result<bool, StoreError>;

    /// One page of `owner`'s profiles, ordered by creation, plus the total count
    async fn find_profiles(
        &self,
        owner: Uuid,
        page: Page,
    ) -> Result<PaginationResult<Profile>, StoreError>;

    /// Insert a profile. Fails with `StoreError::Conflict` on a duplicate name.
    async fn insert_profile(&self, owner: Uuid, name: &str) -> Result<Profile, StoreError>;

    /// Rename the profile matching `{id, owner}`. Returns the number of rows changed.
    async fn rename_profile(&self, id: Uuid, owner: Uuid, name: &str) -> Result<u64, StoreError>;

    /// Delete the profile matching `{id, owner}`. Returns the number of rows removed.
    async fn delete_profile(&self, id: Uuid, owner: Uuid) -> Result<u64, StoreError>;
}

/// Everything the handlers need from persistence
pub trait Store: UserStore + ProfileStore {}

impl<T: UserStore + ProfileStore> Store for T {}
