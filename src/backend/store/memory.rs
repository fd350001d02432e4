/**
 * In-Memory Store
 *
 * Process-local tables behind a `tokio::sync::RwLock`. Used when no
 * database URL is configured and by the test suite. It enforces the same
 * unique constraints as the Postgres schema and reports violations with the
 * same constraint names.
 */

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::profiles::types::{Page, Profile};
use crate::backend::store::{ProfileStore, StoreError, UserStore};
use crate::shared::PaginationResult;

const USERS_EMAIL_KEY: &str = "users_email_key";
const PROFILES_OWNER_NAME_KEY: &str = "profiles_owner_name_key";

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    /// Kept in insertion order, which is creation order
    profiles: Vec<Profile>,
}

/// Store holding everything in process memory
///
/// Cloning is cheap; clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of profiles across all owners
    pub async fn profile_count(&self) -> usize {
        self.tables.read().await.profiles.len()
    }

    /// Look a profile up by id regardless of owner
    pub async fn find_profile(&self, id: Uuid) -> Option<Profile> {
        self.tables
            .read()
            .await
            .profiles
            .iter()
            .find(|profile| profile.id == id)
            .cloned()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|user| user.email == email).cloned())
    }

    async fn user_exists(&self, email: &str) -> Result<bool, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().any(|user| user.email == email))
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|existing| existing.email == user.email) {
            return Err(StoreError::Conflict(USERS_EMAIL_KEY.to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn profile_exists(&self, owner: Uuid, name: &str) -> Result<bool, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .profiles
            .iter()
            .any(|profile| profile.owner == owner && profile.name == name))
    }

    async fn find_profiles(
        &self,
        owner: Uuid,
        page: Page,
    ) -> Result<PaginationResult<Profile>, StoreError> {
        let tables = self.tables.read().await;
        let owned: Vec<&Profile> = tables
            .profiles
            .iter()
            .filter(|profile| profile.owner == owner)
            .collect();

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let list = owned
            .iter()
            .skip(offset)
            .take(page.limit() as usize)
            .map(|profile| (*profile).clone())
            .collect();

        Ok(PaginationResult::new(owned.len() as u64, list))
    }

    async fn insert_profile(&self, owner: Uuid, name: &str) -> Result<Profile, StoreError> {
        let mut tables = self.tables.write().await;

        if tables
            .profiles
            .iter()
            .any(|profile| profile.owner == owner && profile.name == name)
        {
            return Err(StoreError::Conflict(PROFILES_OWNER_NAME_KEY.to_string()));
        }

        let profile = Profile {
            id: Uuid::new_v4(),
            owner,
            name: name.to_string(),
        };
        tables.profiles.push(profile.clone());

        Ok(profile)
    }

    async fn rename_profile(&self, id: Uuid, owner: Uuid, name: &str) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;

        if tables
            .profiles
            .iter()
            .any(|profile| profile.owner == owner && profile.name == name && profile.id != id)
        {
            return Err(StoreError::Conflict(PROFILES_OWNER_NAME_KEY.to_string()));
        }

        let mut changed = 0;
        for profile in tables
            .profiles
            .iter_mut()
            .filter(|profile| profile.id == id && profile.owner == owner)
        {
            profile.name = name.to_string();
            changed += 1;
        }

        Ok(changed)
    }

    async fn delete_profile(&self, id: Uuid, owner: Uuid) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.profiles.len();
        tables
            .profiles
            .retain(|profile| !(profile.id == id && profile.owner == owner));

        Ok((before - tables.profiles.len()) as u64)
    }
}
