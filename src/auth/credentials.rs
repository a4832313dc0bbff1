//! Credential service: password hashing and reset tokens

use super::RESET_TOKEN_LENGTH;
use super::password::{Argon2CredentialHasher, CredentialHasher};
use crate::config::AuthConfig;
use crate::core::models::PasswordResetToken;
use crate::storage::{IdentityStore, StoreTransaction};
use crate::utils::auth::crypto::{generate_token, hash_token};
use crate::utils::error::{AdminError, Result};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Hashes passwords and manages password-reset tokens
pub struct CredentialService {
    hasher: Arc<dyn CredentialHasher>,
    store: Arc<dyn IdentityStore>,
    reset_token_ttl: Duration,
}

impl fmt::Debug for CredentialService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialService")
            .field("store", &self.store.backend_name())
            .field("reset_token_ttl", &self.reset_token_ttl)
            .finish()
    }
}

impl CredentialService {
    /// Create a credential service backed by Argon2
    pub fn new(store: Arc<dyn IdentityStore>, config: &AuthConfig) -> Self {
        Self::with_hasher(
            store,
            Arc::new(Argon2CredentialHasher),
            config.reset_token_ttl(),
        )
    }

    /// Create a credential service with a custom hasher
    pub fn with_hasher(
        store: Arc<dyn IdentityStore>,
        hasher: Arc<dyn CredentialHasher>,
        reset_token_ttl: Duration,
    ) -> Self {
        Self {
            hasher,
            store,
            reset_token_ttl,
        }
    }

    /// Hash a raw password into an opaque credential
    pub fn hash(&self, password: &str) -> Result<String> {
        self.hasher.hash(password)
    }

    /// Check a raw password against a stored credential
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        self.hasher.verify(password, hash)
    }

    /// Issue a reset token for a user, replacing any outstanding one
    pub async fn generate_reset_token(&self, user_id: &str) -> Result<String> {
        let mut txn = self.store.begin().await?;

        if txn.find_user(user_id).await?.is_none() {
            return Err(AdminError::not_found(format!("User {} not found", user_id)));
        }

        let token = self.issue_reset_token(txn.as_mut(), user_id).await?;
        txn.commit().await?;
        Ok(token)
    }

    /// Check a reset token and mark it used; `false` if unknown, used or expired
    pub async fn validate_and_consume_reset_token(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<bool> {
        let mut txn = self.store.begin().await?;
        let valid = self.consume_reset_token(txn.as_mut(), user_id, token).await?;
        txn.commit().await?;
        Ok(valid)
    }

    pub(crate) async fn issue_reset_token(
        &self,
        txn: &mut dyn StoreTransaction,
        user_id: &str,
    ) -> Result<String> {
        let token = generate_token(RESET_TOKEN_LENGTH);
        let now = Utc::now();
        let ttl = chrono::Duration::from_std(self.reset_token_ttl)
            .map_err(|e| AdminError::Config(format!("Invalid reset token lifetime: {}", e)))?;
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            AdminError::config(format!(
                "Reset token lifetime of {}s overflows the clock",
                self.reset_token_ttl.as_secs()
            ))
        })?;

        txn.replace_reset_token(&PasswordResetToken {
            user_id: user_id.to_string(),
            token_hash: hash_token(&token),
            expires_at,
            created_at: now,
        })
        .await?;

        info!("Password reset token generated for user: {}", user_id);
        Ok(token)
    }

    pub(crate) async fn consume_reset_token(
        &self,
        txn: &mut dyn StoreTransaction,
        user_id: &str,
        token: &str,
    ) -> Result<bool> {
        let valid = txn
            .consume_reset_token(user_id, &hash_token(token), Utc::now())
            .await?;
        debug!("Reset token for user {} valid: {}", user_id, valid);
        Ok(valid)
    }
}
