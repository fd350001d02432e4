//! Authentication test helpers
//!
//! Provides a ready-to-use test server, users seeded straight into the
//! memory store, and tokens signed with the server's own keys.

use std::sync::Arc;

use axum_test::TestServer;
use palabrator::backend::auth::sessions::TokenService;
use palabrator::backend::auth::users::{NewUser, User};
use palabrator::backend::routes::create_router;
use palabrator::backend::store::{MemoryStore, UserStore};
use palabrator::backend::AppState;
use palabrator::shared::AppConfig;
use uuid::Uuid;

/// Secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// bcrypt cost for seeded users; login verifies any cost
const SEED_HASH_COST: u32 = 4;

/// Test user credentials
pub struct TestUser {
    pub user: User,
    pub password: String,
    pub token: String,
}

/// A test server over the real router, plus handles into its state
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryStore,
    pub state: AppState,
}

pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .build()
        .expect("test config is valid")
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let store = MemoryStore::new();
        let state = AppState::new(Arc::new(store.clone()), config);
        let server = TestServer::new(create_router(state.clone())).expect("test server starts");

        Self {
            server,
            store,
            state,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.state.tokens
    }

    /// Insert a user directly and sign a token for them
    pub async fn seed_user(&self, email: &str, password: &str) -> TestUser {
        let password_hash = bcrypt::hash(password, SEED_HASH_COST).expect("bcrypt hash");
        let user = self
            .store
            .insert_user(NewUser {
                name: "Test".to_string(),
                last_name: "User".to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .expect("seed user");
        let token = self.tokens().sign(&user.email).expect("sign test token");

        TestUser {
            user,
            password: password.to_string(),
            token,
        }
    }

    /// Seed a user with a unique email
    pub async fn seed_unique_user(&self) -> TestUser {
        let email = format!("test_{}@example.com", Uuid::new_v4());
        self.seed_user(&email, "test_password_123").await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
