//! Role operations

use crate::core::models::{Role, RoleWithCount};
use crate::storage::IdentityStore;
use crate::utils::error::{AdminError, Result};
use crate::utils::validation::DataValidator;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Role management operations
#[derive(Debug)]
pub struct RoleOperations {
    store: Arc<dyn IdentityStore>,
}

impl RoleOperations {
    /// Create new role operations handler
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Create a new role
    pub async fn create_role(&self, name: &str) -> Result<String> {
        DataValidator::validate_role_name(name)?;
        let name = name.trim();
        info!("Creating role: {}", name);

        let mut txn = self.store.begin().await?;

        if txn.find_role_by_name(name).await?.is_some() {
            warn!("Rejected duplicate role name: {}", name);
            return Err(AdminError::validation(format!(
                "Role name '{}' is already taken",
                name
            )));
        }

        let role = Role::new(name);
        txn.insert_role(&role).await?;
        txn.commit().await?;

        info!("Role created successfully: {}", role.id);
        Ok(role.id)
    }

    /// Rename a role in place
    pub async fn rename_role(&self, role_id: &str, new_name: &str) -> Result<()> {
        let mut txn = self.store.begin().await?;

        let mut role = txn
            .find_role(role_id)
            .await?
            .ok_or_else(|| AdminError::not_found(format!("Role {} not found", role_id)))?;

        DataValidator::validate_role_name(new_name)?;
        let new_name = new_name.trim();

        if role.name == new_name {
            debug!("Role {} already named {}", role_id, new_name);
            return Ok(());
        }

        if let Some(other) = txn.find_role_by_name(new_name).await? {
            if other.id != role.id {
                warn!("Rejected rename of role {} to taken name {}", role_id, new_name);
                return Err(AdminError::validation(format!(
                    "Role name '{}' is already taken",
                    new_name
                )));
            }
        }

        info!("Renaming role {} from {} to {}", role_id, role.name, new_name);
        role.name = new_name.to_string();
        txn.update_role(&role).await?;
        txn.commit().await
    }

    /// Delete a role with no members
    pub async fn delete_role(&self, role_id: &str) -> Result<()> {
        let mut txn = self.store.begin().await?;

        let role = txn
            .find_role(role_id)
            .await?
            .ok_or_else(|| AdminError::not_found(format!("Role {} not found", role_id)))?;

        let members = txn.count_role_members(role_id).await?;
        if members > 0 {
            warn!(
                "Refusing to delete role {} held by {} user(s)",
                role.name, members
            );
            return Err(AdminError::conflict(format!(
                "Role '{}' cannot be deleted because it is assigned to one or more users",
                role.name
            )));
        }

        txn.delete_role(role_id).await?;
        txn.commit().await?;

        info!("Role deleted: {} ({})", role.name, role_id);
        Ok(())
    }

    /// List roles with their membership counts
    pub async fn list_roles(&self) -> Result<Vec<RoleWithCount>> {
        let mut txn = self.store.begin().await?;

        let roles = txn.list_roles().await?;
        let counts = txn.membership_counts().await?;
        txn.commit().await?;

        debug!("Listed {} roles", roles.len());
        Ok(roles
            .into_iter()
            .map(|role| {
                let member_count = counts.get(&role.id).copied().unwrap_or(0);
                RoleWithCount { role, member_count }
            })
            .collect())
    }

    /// Create the named roles that are missing
    pub async fn ensure_roles(&self, names: &[String]) -> Result<Vec<String>> {
        let mut txn = self.store.begin().await?;
        let mut created = Vec::new();

        for name in names {
            DataValidator::validate_role_name(name)?;
            let name = name.trim();

            if txn.find_role_by_name(name).await?.is_none() {
                txn.insert_role(&Role::new(name)).await?;
                created.push(name.to_string());
            }
        }

        txn.commit().await?;

        if !created.is_empty() {
            info!("Bootstrapped roles: {}", created.join(", "));
        }
        Ok(created)
    }
}
