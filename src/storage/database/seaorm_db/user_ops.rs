use crate::core::models::User;
use crate::utils::error::{AdminError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, password_reset_token, user, user_role};
use super::errors::classify_write_error;
use super::types::SeaOrmTransaction;

impl SeaOrmTransaction {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id.to_string())
            .one(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// List all users ordered by email
    pub async fn list_users_by_email(&self) -> Result<Vec<User>> {
        debug!("Listing users");

        let models = entities::User::find()
            .order_by_asc(user::Column::Email)
            .all(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(models.iter().map(user::Model::to_domain_user).collect())
    }

    /// Create a new user
    pub async fn create_user(&self, user: &User) -> Result<()> {
        debug!("Creating user: {}", user.email);

        let active_model = user::Model::from_domain_user(user);

        entities::User::insert(active_model)
            .exec_without_returning(&self.txn)
            .await
            .map_err(|e| classify_write_error(e, &format!("Email '{}'", user.email)))?;

        Ok(())
    }

    /// Overwrite a user's profile and credential
    pub async fn save_user(&self, user: &User) -> Result<()> {
        debug!("Updating user: {}", user.id);

        let active_model = user::Model::from_domain_user(user);

        match active_model.update(&self.txn).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => {
                Err(AdminError::NotFound(format!("User {} not found", user.id)))
            }
            Err(e) => Err(classify_write_error(e, &format!("Email '{}'", user.email))),
        }
    }

    /// Delete a user, its membership edges and its reset tokens
    pub async fn delete_user_cascade(&self, user_id: &str) -> Result<bool> {
        debug!("Deleting user: {}", user_id);

        entities::UserRole::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .exec(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        entities::PasswordResetToken::delete_many()
            .filter(password_reset_token::Column::UserId.eq(user_id))
            .exec(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        let result = entities::User::delete_by_id(user_id.to_string())
            .exec(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(result.rows_affected > 0)
    }
}
