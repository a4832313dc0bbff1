//! Role administration - main facade

use super::assignment_ops::AssignmentOperations;
use super::role_ops::RoleOperations;
use super::user_ops::UserOperations;
use crate::auth::CredentialService;
use crate::config::{PasswordPolicy, UnknownRolePolicy};
use crate::core::models::{AssignableRole, RoleWithCount, User, UserProfile, UserWithRoles};
use crate::storage::IdentityStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// Administration of users, roles and their memberships
#[derive(Debug)]
pub struct RbacManager {
    role_ops: RoleOperations,
    user_ops: UserOperations,
    assignment_ops: AssignmentOperations,
}

impl RbacManager {
    /// Create a new manager over a store
    pub fn new(
        store: Arc<dyn IdentityStore>,
        credentials: Arc<CredentialService>,
        password_policy: PasswordPolicy,
        unknown_role_policy: UnknownRolePolicy,
    ) -> Self {
        Self {
            role_ops: RoleOperations::new(Arc::clone(&store)),
            user_ops: UserOperations::new(Arc::clone(&store), credentials, password_policy),
            assignment_ops: AssignmentOperations::new(store, unknown_role_policy),
        }
    }

    // Role operations

    /// Create a role, returning its id
    pub async fn create_role(&self, name: &str) -> Result<String> {
        self.role_ops.create_role(name).await
    }

    /// Rename a role
    pub async fn rename_role(&self, role_id: &str, new_name: &str) -> Result<()> {
        self.role_ops.rename_role(role_id, new_name).await
    }

    /// Delete a role that nobody holds
    pub async fn delete_role(&self, role_id: &str) -> Result<()> {
        self.role_ops.delete_role(role_id).await
    }

    /// All roles ordered by name, with membership counts
    pub async fn list_roles(&self) -> Result<Vec<RoleWithCount>> {
        self.role_ops.list_roles().await
    }

    /// Create any of the given roles that do not exist yet
    pub async fn ensure_roles(&self, names: &[String]) -> Result<Vec<String>> {
        self.role_ops.ensure_roles(names).await
    }

    // User operations

    /// Create a user, optionally holding one initial role; returns the user id
    pub async fn create_user(
        &self,
        profile: UserProfile,
        password: &str,
        initial_role: Option<&str>,
    ) -> Result<String> {
        self.user_ops
            .create_user(profile, password, initial_role)
            .await
    }

    /// Update a user's profile and, when given, overwrite the credential
    pub async fn update_user(
        &self,
        user_id: &str,
        profile: UserProfile,
        new_password: Option<&str>,
    ) -> Result<User> {
        self.user_ops
            .update_user(user_id, profile, new_password)
            .await
    }

    /// Delete a user and its memberships
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.user_ops.delete_user(user_id).await
    }

    /// All users ordered by email, with their role names
    pub async fn list_users_with_roles(&self) -> Result<Vec<UserWithRoles>> {
        self.user_ops.list_users_with_roles().await
    }

    // Assignment operations

    /// Every role paired with whether the user holds it
    pub async fn assignable_roles_for_user(&self, user_id: &str) -> Result<Vec<AssignableRole>> {
        self.assignment_ops.assignable_roles_for_user(user_id).await
    }

    /// Make the user's roles exactly the named set; returns the final role names
    pub async fn replace_user_roles(
        &self,
        user_id: &str,
        desired_role_names: &[String],
    ) -> Result<Vec<String>> {
        self.assignment_ops
            .replace_user_roles(user_id, desired_role_names)
            .await
    }
}
