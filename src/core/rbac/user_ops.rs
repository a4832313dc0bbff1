//! User operations

use crate::auth::CredentialService;
use crate::config::PasswordPolicy;
use crate::core::models::{User, UserProfile, UserWithRoles};
use crate::storage::IdentityStore;
use crate::utils::error::{AdminError, Result};
use crate::utils::validation::DataValidator;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User management operations
#[derive(Debug)]
pub struct UserOperations {
    store: Arc<dyn IdentityStore>,
    credentials: Arc<CredentialService>,
    password_policy: PasswordPolicy,
}

impl UserOperations {
    /// Create new user operations handler
    pub fn new(
        store: Arc<dyn IdentityStore>,
        credentials: Arc<CredentialService>,
        password_policy: PasswordPolicy,
    ) -> Self {
        Self {
            store,
            credentials,
            password_policy,
        }
    }

    /// Create a new user
    pub async fn create_user(
        &self,
        profile: UserProfile,
        password: &str,
        initial_role: Option<&str>,
    ) -> Result<String> {
        let profile = profile.normalized();
        DataValidator::validate_email(&profile.email)?;
        DataValidator::validate_password(password, &self.password_policy)?;

        let password_hash = self.credentials.hash(password)?;

        info!("Creating user: {}", profile.email);
        let mut txn = self.store.begin().await?;

        if txn.find_user_by_email(&profile.email).await?.is_some() {
            warn!("Rejected duplicate email: {}", profile.email);
            return Err(AdminError::validation(format!(
                "Email '{}' is already taken",
                profile.email
            )));
        }

        let role = match initial_role.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => Some(
                txn.find_role_by_name(name)
                    .await?
                    .ok_or_else(|| AdminError::not_found(format!("Role '{}' not found", name)))?,
            ),
            None => None,
        };

        let user = User::new(profile, password_hash);
        txn.insert_user(&user).await?;

        if let Some(role) = &role {
            txn.insert_edge(&user.id, &role.id).await?;
        }

        txn.commit().await?;

        info!(
            "User created successfully: {} (initial role: {})",
            user.id,
            role.as_ref().map_or("none", |r| r.name.as_str())
        );
        Ok(user.id)
    }

    /// Update profile and optionally overwrite the credential
    pub async fn update_user(
        &self,
        user_id: &str,
        profile: UserProfile,
        new_password: Option<&str>,
    ) -> Result<User> {
        // hash before taking the store; a weak password is still reported below
        let new_hash = match new_password {
            Some(password)
                if DataValidator::validate_password(password, &self.password_policy).is_ok() =>
            {
                Some(self.credentials.hash(password)?)
            }
            _ => None,
        };

        let mut txn = self.store.begin().await?;

        let mut user = txn
            .find_user(user_id)
            .await?
            .ok_or_else(|| AdminError::not_found(format!("User {} not found", user_id)))?;

        let profile = profile.normalized();
        DataValidator::validate_email(&profile.email)?;
        if let Some(password) = new_password {
            DataValidator::validate_password(password, &self.password_policy)?;
        }

        if let Some(owner) = txn.find_user_by_email(&profile.email).await? {
            if owner.id != user.id {
                warn!("Rejected email change to taken address: {}", profile.email);
                return Err(AdminError::validation(format!(
                    "Email '{}' is already taken",
                    profile.email
                )));
            }
        }

        user.apply_profile(profile);
        if let Some(password_hash) = new_hash {
            user.password_hash = password_hash;
            user.updated_at = Utc::now();
            info!("Administrator overwrote credential of user {}", user.id);
        }

        txn.update_user(&user).await?;
        txn.commit().await?;

        info!("User updated: {}", user.id);
        Ok(user)
    }

    /// Delete a user and its membership edges
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        info!("Deleting user: {}", user_id);
        let mut txn = self.store.begin().await?;

        if !txn.delete_user(user_id).await? {
            return Err(AdminError::not_found(format!("User {} not found", user_id)));
        }

        txn.commit().await
    }

    /// List users with their role names
    pub async fn list_users_with_roles(&self) -> Result<Vec<UserWithRoles>> {
        let mut txn = self.store.begin().await?;

        let users = txn.list_users().await?;
        let mut result = Vec::with_capacity(users.len());
        for user in users {
            let roles = txn
                .roles_for_user(&user.id)
                .await?
                .into_iter()
                .map(|role| role.name)
                .collect();
            result.push(UserWithRoles { user, roles });
        }

        txn.commit().await?;
        debug!("Listed {} users", result.len());
        Ok(result)
    }
}
