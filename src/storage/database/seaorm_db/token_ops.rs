use crate::core::models::PasswordResetToken;
use crate::utils::error::{AdminError, Result};
use chrono::{DateTime, Utc};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, password_reset_token};
use super::types::SeaOrmTransaction;

impl SeaOrmTransaction {
    /// Store a reset token, overwriting the user's previous one
    pub async fn store_password_reset_token(&self, token: &PasswordResetToken) -> Result<()> {
        debug!("Storing password reset token for user: {}", token.user_id);

        entities::PasswordResetToken::delete_by_id(token.user_id.clone())
            .exec(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        let active_model = password_reset_token::ActiveModel {
            user_id: Set(token.user_id.clone()),
            token_hash: Set(token.token_hash.clone()),
            expires_at: Set(token.expires_at.into()),
            created_at: Set(token.created_at.into()),
            used_at: Set(None),
        };

        entities::PasswordResetToken::insert(active_model)
            .exec_without_returning(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(())
    }

    /// Mark the user's token used if it matches the digest and is still live
    pub async fn verify_password_reset_token(
        &self,
        user_id: &str,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        debug!("Verifying password reset token for user: {}", user_id);

        let Some(model) = entities::PasswordResetToken::find_by_id(user_id.to_string())
            .one(&self.txn)
            .await
            .map_err(AdminError::Database)?
        else {
            return Ok(false);
        };

        if model.token_hash != token_hash || model.used_at.is_some() {
            return Ok(false);
        }

        let token = PasswordResetToken {
            user_id: model.user_id.clone(),
            token_hash: model.token_hash.clone(),
            expires_at: model.expires_at.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
        };
        if !token.is_live(now) {
            debug!("Password reset token for user {} has expired", user_id);
            return Ok(false);
        }

        let mut active_model: password_reset_token::ActiveModel = model.into();
        active_model.used_at = Set(Some(now.into()));
        active_model
            .update(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(true)
    }
}
