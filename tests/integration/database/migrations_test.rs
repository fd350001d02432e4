//! Database migration tests
//!
//! Tests to ensure migrations run and the schema carries the constraints
//! the store relies on.

use crate::common::database::test_store;

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let Some(store) = test_store().await else { return };

    // A second run finds everything applied
    let result = sqlx::migrate!().run(store.pool()).await;
    assert!(result.is_ok(), "Migrations should re-run cleanly: {:?}", result.err());
}

#[tokio::test]
async fn test_tables_exist() {
    let Some(store) = test_store().await else { return };

    for table in ["users", "profiles"] {
        let sql = format!("SELECT 1 FROM {} LIMIT 1", table);
        let result = sqlx::query(&sql)
            .execute(store.pool())
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
async fn test_unique_constraints_exist() {
    let Some(store) = test_store().await else { return };

    let constraints: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT conname::text
        FROM pg_constraint
        WHERE contype = 'u' AND conrelid IN ('users'::regclass, 'profiles'::regclass)
        "#,
    )
    .fetch_all(store.pool())
    .await
    .unwrap();

    assert!(constraints.iter().any(|c| c == "users_email_key"));
    assert!(constraints.iter().any(|c| c == "profiles_owner_name_key"));
}
