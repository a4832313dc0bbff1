//! Account flows: sign-in and password reset

use super::credentials::CredentialService;
use super::jwt::JwtHandler;
use crate::config::{AuthConfig, PasswordPolicy};
use crate::core::models::{User, normalize_email};
use crate::storage::IdentityStore;
use crate::utils::error::{AdminError, Result};
use crate::utils::logging::mask_email;
use crate::utils::validation::DataValidator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

const INVALID_LOGIN: &str = "Invalid login attempt";
const INVALID_RESET_TOKEN: &str = "Invalid password reset token";

/// Result of a successful sign-in
#[derive(Debug, Clone, Serialize)]
pub struct SignedInUser {
    /// The signed-in user
    pub user: User,
    /// Role names held by the user
    pub roles: Vec<String>,
    /// Bearer token
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Password reset form
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    /// Account email
    pub email: String,
    /// Token from the reset link
    pub token: String,
    /// New password
    pub password: String,
    /// New password, repeated
    pub confirm_password: String,
}

/// Sign-in and self-service password reset
#[derive(Debug, Clone)]
pub struct AccountService {
    store: Arc<dyn IdentityStore>,
    credentials: Arc<CredentialService>,
    jwt: Arc<JwtHandler>,
    password_policy: PasswordPolicy,
    reset_base_url: String,
}

impl AccountService {
    /// Create a new account service
    pub fn new(
        store: Arc<dyn IdentityStore>,
        credentials: Arc<CredentialService>,
        jwt: Arc<JwtHandler>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            store,
            credentials,
            jwt,
            password_policy: config.password_policy.clone(),
            reset_base_url: config.reset_base_url.clone(),
        }
    }

    /// Check credentials and issue a bearer token
    ///
    /// Unknown emails and wrong passwords fail with the same error.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignedInUser> {
        let email = normalize_email(email);
        let mut txn = self.store.begin().await?;

        let Some(user) = txn.find_user_by_email(&email).await? else {
            warn!("Sign-in failed for unknown account {}", mask_email(&email));
            return Err(AdminError::auth(INVALID_LOGIN));
        };

        let roles: Vec<String> = txn
            .roles_for_user(&user.id)
            .await?
            .into_iter()
            .map(|role| role.name)
            .collect();
        txn.commit().await?;

        if !self.credentials.verify(password, &user.password_hash)? {
            warn!("Sign-in failed for user {}", user.id);
            return Err(AdminError::auth(INVALID_LOGIN));
        }

        let access_token = self.jwt.create_access_token(&user, roles.clone())?;

        info!("User {} signed in", user.id);
        Ok(SignedInUser {
            user,
            roles,
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.expiration(),
        })
    }

    /// Generate a reset link for a known email
    ///
    /// There is no mail transport, so the link is logged. Unknown emails yield `None`.
    pub async fn forgot_password(&self, email: &str) -> Result<Option<String>> {
        let email = normalize_email(email);
        let mut txn = self.store.begin().await?;

        let Some(user) = txn.find_user_by_email(&email).await? else {
            info!(
                "Password reset requested for unknown account {}",
                mask_email(&email)
            );
            return Ok(None);
        };

        let token = self
            .credentials
            .issue_reset_token(txn.as_mut(), &user.id)
            .await?;
        txn.commit().await?;

        let link = self.reset_link(&user.email, &token)?;
        warn!("Password reset link for user {}: {}", user.id, link);
        Ok(Some(link))
    }

    /// Overwrite a credential using a reset token
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<()> {
        DataValidator::validate_password_confirmation(&request.password, &request.confirm_password)?;
        DataValidator::validate_password(&request.password, &self.password_policy)?;

        let password_hash = self.credentials.hash(&request.password)?;

        let email = normalize_email(&request.email);
        let mut txn = self.store.begin().await?;

        let Some(mut user) = txn.find_user_by_email(&email).await? else {
            warn!("Password reset attempted for unknown account {}", mask_email(&email));
            return Err(AdminError::auth(INVALID_RESET_TOKEN));
        };

        let consumed = self
            .credentials
            .consume_reset_token(txn.as_mut(), &user.id, request.token.trim())
            .await?;
        if !consumed {
            warn!("Invalid password reset token presented for user {}", user.id);
            return Err(AdminError::auth(INVALID_RESET_TOKEN));
        }

        user.password_hash = password_hash;
        user.updated_at = chrono::Utc::now();
        txn.update_user(&user).await?;
        txn.commit().await?;

        info!("Password reset successfully for user: {}", user.id);
        Ok(())
    }

    fn reset_link(&self, email: &str, token: &str) -> Result<String> {
        let url = url::Url::parse_with_params(
            &self.reset_base_url,
            &[("email", email), ("token", token)],
        )
        .map_err(|e| AdminError::Config(format!("Invalid reset base URL: {}", e)))?;
        Ok(url.to_string())
    }
}
