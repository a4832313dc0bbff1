use crate::core::models::{Role, normalize_role_name};
use crate::utils::error::{AdminError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role};
use super::errors::classify_write_error;
use super::types::SeaOrmTransaction;

impl SeaOrmTransaction {
    /// Find role by ID
    pub async fn find_role_by_id(&self, role_id: &str) -> Result<Option<Role>> {
        debug!("Finding role by ID: {}", role_id);

        let role_model = entities::Role::find_by_id(role_id.to_string())
            .one(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(role_model.map(|model| model.to_domain_role()))
    }

    /// Find role by name, ignoring case
    pub async fn find_role_by_normalized_name(&self, name: &str) -> Result<Option<Role>> {
        debug!("Finding role by name: {}", name);

        let role_model = entities::Role::find()
            .filter(role::Column::NormalizedName.eq(normalize_role_name(name)))
            .one(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(role_model.map(|model| model.to_domain_role()))
    }

    /// List all roles ordered by name
    pub async fn list_roles_by_name(&self) -> Result<Vec<Role>> {
        debug!("Listing roles");

        let models = entities::Role::find()
            .order_by_asc(role::Column::NormalizedName)
            .order_by_asc(role::Column::Name)
            .all(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(models.iter().map(role::Model::to_domain_role).collect())
    }

    /// Create a new role
    pub async fn create_role(&self, role: &Role) -> Result<()> {
        debug!("Creating role: {}", role.name);

        entities::Role::insert(role::Model::from_domain_role(role))
            .exec_without_returning(&self.txn)
            .await
            .map_err(|e| classify_write_error(e, &format!("Role name '{}'", role.name)))?;

        Ok(())
    }

    /// Overwrite a role's name
    pub async fn save_role(&self, role: &Role) -> Result<()> {
        debug!("Updating role: {}", role.id);

        match role::Model::from_domain_role(role).update(&self.txn).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => {
                Err(AdminError::NotFound(format!("Role {} not found", role.id)))
            }
            Err(e) => Err(classify_write_error(e, &format!("Role name '{}'", role.name))),
        }
    }

    /// Delete a role; the foreign key on `user_roles` refuses while edges exist
    pub async fn delete_role_by_id(&self, role_id: &str) -> Result<bool> {
        debug!("Deleting role: {}", role_id);

        let result = entities::Role::delete_by_id(role_id.to_string())
            .exec(&self.txn)
            .await
            .map_err(|e| classify_write_error(e, &format!("Role {}", role_id)))?;

        Ok(result.rows_affected > 0)
    }
}
