use crate::core::models::Role;
use crate::utils::error::{AdminError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::collections::HashMap;
use tracing::debug;

use super::super::entities::{self, role, user_role};
use super::errors::classify_write_error;
use super::types::SeaOrmTransaction;

impl SeaOrmTransaction {
    /// Roles held by a user, ordered by name
    pub async fn find_roles_for_user(&self, user_id: &str) -> Result<Vec<Role>> {
        debug!("Finding roles for user: {}", user_id);

        let models = entities::Role::find()
            .inner_join(entities::UserRole)
            .filter(user_role::Column::UserId.eq(user_id))
            .order_by_asc(role::Column::NormalizedName)
            .order_by_asc(role::Column::Name)
            .all(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(models.iter().map(role::Model::to_domain_role).collect())
    }

    /// Number of edges referencing a role
    pub async fn count_members(&self, role_id: &str) -> Result<u64> {
        debug!("Counting members of role: {}", role_id);

        entities::UserRole::find()
            .filter(user_role::Column::RoleId.eq(role_id))
            .count(&self.txn)
            .await
            .map_err(AdminError::Database)
    }

    /// Edge count grouped by role
    pub async fn count_members_per_role(&self) -> Result<HashMap<String, u64>> {
        debug!("Counting members per role");

        let rows: Vec<(String, i64)> = entities::UserRole::find()
            .select_only()
            .column(user_role::Column::RoleId)
            .column_as(Expr::col(user_role::Column::UserId).count(), "member_count")
            .group_by(user_role::Column::RoleId)
            .into_tuple()
            .all(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(rows
            .into_iter()
            .map(|(role_id, count)| (role_id, count.max(0) as u64))
            .collect())
    }

    /// Add a membership edge unless it already exists
    pub async fn add_membership(&self, user_id: &str, role_id: &str) -> Result<bool> {
        debug!("Adding user {} to role {}", user_id, role_id);

        let existing = entities::UserRole::find_by_id((user_id.to_string(), role_id.to_string()))
            .one(&self.txn)
            .await
            .map_err(AdminError::Database)?;
        if existing.is_some() {
            return Ok(false);
        }

        let active_model = user_role::ActiveModel {
            user_id: Set(user_id.to_string()),
            role_id: Set(role_id.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        entities::UserRole::insert(active_model)
            .exec_without_returning(&self.txn)
            .await
            .map_err(|e| match classify_write_error(e, "Membership edge") {
                AdminError::Validation(msg) | AdminError::Conflict(msg) => AdminError::Conflict(
                    format!("User {} or role {} changed concurrently: {}", user_id, role_id, msg),
                ),
                other => other,
            })?;

        Ok(true)
    }

    /// Remove a membership edge
    pub async fn remove_membership(&self, user_id: &str, role_id: &str) -> Result<bool> {
        debug!("Removing user {} from role {}", user_id, role_id);

        let result = entities::UserRole::delete_by_id((user_id.to_string(), role_id.to_string()))
            .exec(&self.txn)
            .await
            .map_err(AdminError::Database)?;

        Ok(result.rows_affected > 0)
    }
}
