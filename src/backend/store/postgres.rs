/**
 * PostgreSQL Store
 *
 * Schema lives in `migrations/` and is applied at startup. Unique
 * constraints `users_email_key` and `profiles_owner_name_key` back the
 * handler-level existence checks.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::profiles::types::{Page, Profile};
use crate::backend::store::{ProfileStore, StoreError, UserStore};
use crate::shared::PaginationResult;

/// Store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for schema checks in tests
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, last_name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_exists(&self, email: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)"
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, last_name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, last_name, email, password_hash, created_at
            "#
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn profile_exists(&self, owner: Uuid, name: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM profiles WHERE owner = $1 AND name = $2)"
        )
        .bind(owner)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_profiles(
        &self,
        owner: Uuid,
        page: Page,
    ) -> Result<PaginationResult<Profile>, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM profiles WHERE owner = $1"
        )
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        let list = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, owner, name
            FROM profiles
            WHERE owner = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2 OFFSET $3
            "#
        )
        .bind(owner)
        .bind(i64::from(page.limit()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(PaginationResult::new(u64::try_from(count).unwrap_or(0), list))
    }

    async fn insert_profile(&self, owner: Uuid, name: &str) -> Result<Profile, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, owner, name, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner, name
            "#
        )
        .bind(id)
        .bind(owner)
        .bind(name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn rename_profile(&self, id: Uuid, owner: Uuid, name: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET name = $1
            WHERE id = $2 AND owner = $3
            "#
        )
        .bind(name)
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_profile(&self, id: Uuid, owner: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1 AND owner = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
