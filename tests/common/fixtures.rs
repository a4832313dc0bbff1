//! Test fixtures and data factories

use identity_admin::config::{Config, DatabaseConfig, MEMORY_STORE_URL};
use identity_admin::core::models::UserProfile;
use identity_admin::server::AppState;
use identity_admin::storage::IdentityStore;
use identity_admin::storage::memory::MemoryStore;
use std::sync::Arc;

/// Secret long enough to pass configuration validation
pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Password satisfying the default policy
pub const TEST_PASSWORD: &str = "Passw0rd!";

/// Configuration with a fixed secret over the given database URL
pub fn test_config(database_url: &str) -> Config {
    let mut config = Config::default();
    config.service.storage.database = DatabaseConfig {
        url: database_url.to_string(),
        ..DatabaseConfig::sqlite_in_memory()
    };
    config.service.auth.jwt_secret = TEST_JWT_SECRET.to_string();
    config.service.auth.reset_base_url = "https://admin.example.com/account/reset".to_string();
    config.service.auth.expose_reset_link = true;
    config
}

/// Application state over the given store, with bootstrap roles created
pub async fn state_with_store(store: Arc<dyn IdentityStore>) -> AppState {
    let state = AppState::new(test_config(MEMORY_STORE_URL), store);
    state.bootstrap().await.expect("Failed to bootstrap roles");
    state
}

/// Application state over a fresh in-memory store
pub async fn memory_state() -> AppState {
    state_with_store(Arc::new(MemoryStore::new())).await
}

/// Factory for user profiles
pub struct UserFactory;

impl UserFactory {
    /// Profile with a name derived from the email's local part
    pub fn profile(email: &str) -> UserProfile {
        let local = email.split('@').next().unwrap_or(email);
        UserProfile::new(email).with_name(local, "Tester")
    }

    /// Create a user holding the given roles and return its id
    pub async fn create(state: &AppState, email: &str, roles: &[&str]) -> String {
        let id = state
            .rbac
            .create_user(Self::profile(email), TEST_PASSWORD, None)
            .await
            .expect("Failed to create user");

        if !roles.is_empty() {
            let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
            state
                .rbac
                .replace_user_roles(&id, &roles)
                .await
                .expect("Failed to assign roles");
        }
        id
    }
}
