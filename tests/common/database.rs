//! Database test fixtures
//!
//! PostgreSQL tests only run when `DATABASE_URL` points at a disposable
//! database. Without it every database test returns early, so the default
//! `cargo test` run needs nothing but the in-memory store.

use palabrator::backend::auth::users::{NewUser, User};
use palabrator::backend::server::config::load_database;
use palabrator::backend::store::{PgStore, UserStore};
use palabrator::shared::AppConfig;
use uuid::Uuid;

/// Connect to `DATABASE_URL` and run migrations, or `None` when unset
///
/// Migrations go through `load_database`, the same path the server takes
/// at startup.
pub async fn test_store() -> Option<PgStore> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping PostgreSQL test");
        return None;
    };

    let config = AppConfig::builder()
        .database_url(database_url)
        .build()
        .expect("test config is valid");
    let pool = load_database(&config)
        .await
        .expect("Failed to prepare test database")
        .expect("database url was configured");

    Some(PgStore::new(pool))
}

/// Insert a user with a unique email so tests can share one database
pub async fn insert_unique_user(store: &PgStore) -> User {
    store
        .insert_user(NewUser {
            name: "Db".to_string(),
            last_name: "Tester".to_string(),
            email: format!("db_{}@example.com", Uuid::new_v4()),
            password_hash: "not-a-real-hash".to_string(),
        })
        .await
        .expect("insert test user")
}
