//! Role assignment operations

use crate::config::UnknownRolePolicy;
use crate::core::models::AssignableRole;
use crate::storage::IdentityStore;
use crate::utils::error::{AdminError, Result};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tracing::{info, warn};

/// Membership assignment operations
#[derive(Debug)]
pub struct AssignmentOperations {
    store: Arc<dyn IdentityStore>,
    unknown_role_policy: UnknownRolePolicy,
}

impl AssignmentOperations {
    /// Create new assignment operations handler
    pub fn new(store: Arc<dyn IdentityStore>, unknown_role_policy: UnknownRolePolicy) -> Self {
        Self {
            store,
            unknown_role_policy,
        }
    }

    /// Every role, flagged with whether the user holds it
    pub async fn assignable_roles_for_user(&self, user_id: &str) -> Result<Vec<AssignableRole>> {
        let mut txn = self.store.begin().await?;

        if txn.find_user(user_id).await?.is_none() {
            return Err(AdminError::not_found(format!("User {} not found", user_id)));
        }

        let held: HashSet<String> = txn
            .roles_for_user(user_id)
            .await?
            .into_iter()
            .map(|role| role.id)
            .collect();
        let roles = txn.list_roles().await?;
        txn.commit().await?;

        Ok(roles
            .into_iter()
            .map(|role| AssignableRole {
                selected: held.contains(&role.id),
                role_id: role.id,
                role_name: role.name,
            })
            .collect())
    }

    /// Replace the user's membership with the named roles
    pub async fn replace_user_roles(
        &self,
        user_id: &str,
        desired_role_names: &[String],
    ) -> Result<Vec<String>> {
        let mut txn = self.store.begin().await?;

        if txn.find_user(user_id).await?.is_none() {
            return Err(AdminError::not_found(format!("User {} not found", user_id)));
        }

        let mut target = BTreeSet::new();
        let mut unknown = Vec::new();
        for name in desired_role_names {
            match txn.find_role_by_name(name).await? {
                Some(role) => {
                    target.insert(role.id);
                }
                None => unknown.push(name.trim().to_string()),
            }
        }

        if !unknown.is_empty() {
            match self.unknown_role_policy {
                UnknownRolePolicy::Reject => {
                    warn!(
                        "Rejected role assignment for user {}: unknown roles {}",
                        user_id,
                        unknown.join(", ")
                    );
                    return Err(AdminError::validation(format!(
                        "Unknown role(s): {}",
                        unknown.join(", ")
                    )));
                }
                UnknownRolePolicy::Ignore => {
                    warn!(
                        "Ignoring unknown roles for user {}: {}",
                        user_id,
                        unknown.join(", ")
                    );
                }
            }
        }

        let current: BTreeSet<String> = txn
            .roles_for_user(user_id)
            .await?
            .into_iter()
            .map(|role| role.id)
            .collect();

        for role_id in current.difference(&target) {
            txn.remove_edge(user_id, role_id).await?;
        }
        for role_id in target.difference(&current) {
            txn.insert_edge(user_id, role_id).await?;
        }

        let final_roles: Vec<String> = txn
            .roles_for_user(user_id)
            .await?
            .into_iter()
            .map(|role| role.name)
            .collect();
        txn.commit().await?;

        info!(
            "Roles of user {} set to [{}] (+{} -{})",
            user_id,
            final_roles.join(", "),
            target.difference(&current).count(),
            current.difference(&target).count()
        );
        Ok(final_roles)
    }
}
