//! Application state shared across HTTP handlers

use crate::auth::{AccountService, CredentialService, JwtHandler};
use crate::config::Config;
use crate::core::rbac::RbacManager;
use crate::storage::IdentityStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Every field is an `Arc`, so cloning the state per worker is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Identity store
    pub store: Arc<dyn IdentityStore>,
    /// User and role administration
    pub rbac: Arc<RbacManager>,
    /// Sign-in and password reset flows
    pub accounts: Arc<AccountService>,
    /// Bearer token handler
    pub jwt: Arc<JwtHandler>,
}

impl AppState {
    /// Wire the services on top of an opened store
    pub fn new(config: Config, store: Arc<dyn IdentityStore>) -> Self {
        let auth = config.auth();
        let credentials = Arc::new(CredentialService::new(Arc::clone(&store), auth));
        let jwt = Arc::new(JwtHandler::new(auth));

        let rbac = Arc::new(RbacManager::new(
            Arc::clone(&store),
            Arc::clone(&credentials),
            auth.password_policy.clone(),
            config.rbac().unknown_role_policy,
        ));
        let accounts = Arc::new(AccountService::new(
            Arc::clone(&store),
            credentials,
            Arc::clone(&jwt),
            auth,
        ));

        Self {
            config: Arc::new(config),
            store,
            rbac,
            accounts,
            jwt,
        }
    }

    /// Create the configured bootstrap roles that are missing
    pub async fn bootstrap(&self) -> crate::utils::error::Result<Vec<String>> {
        self.rbac
            .ensure_roles(&self.config.rbac().bootstrap_roles)
            .await
    }
}
