/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The store handle (`Arc<dyn Store>`), Postgres or in-memory
 * - The token service, keyed from configuration
 * - The configuration itself
 *
 * Everything is behind `Arc` and read-only after startup, so cloning the
 * state into each request is cheap and needs no locking.
 *
 * # Example
 *
 * ```rust
 * use palabrator::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) -> String {
 *     state.config.jwt_realm.clone()
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenService;
use crate::backend::store::Store;
use crate::shared::AppConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// User and profile persistence
    pub store: Arc<dyn Store>,
    /// Signs and verifies bearer tokens
    pub tokens: Arc<TokenService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state around a store, deriving the token service from `config`
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        let tokens = TokenService::from_config(&config);
        Self {
            store,
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Substates read by `auth_middleware` and `CurrentUser`
impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
