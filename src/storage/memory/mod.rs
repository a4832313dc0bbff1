//! In-memory identity store
//!
//! Transactions are serialized by an async mutex. Each transaction works on a
//! copy of the state that replaces the shared state on commit.

mod state;

use crate::core::models::{PasswordResetToken, Role, User, normalize_role_name};
use crate::storage::{IdentityStore, StoreTransaction};
use crate::utils::error::{AdminError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use state::{MemoryState, StoredResetToken, sorted_roles};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

/// Identity store kept entirely in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transaction currently holds the store
    #[cfg(test)]
    pub(crate) fn is_locked(&self) -> bool {
        self.state.try_lock().is_err()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>> {
        let guard = self.state.clone().lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(MemoryTransaction { guard, working }))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

/// Transaction over the in-memory store
pub struct MemoryTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
}

#[async_trait]
impl StoreTransaction for MemoryTransaction {
    async fn find_user(&mut self, id: &str) -> Result<Option<User>> {
        Ok(self.working.users.get(id).cloned())
    }

    async fn find_user_by_email(&mut self, email: &str) -> Result<Option<User>> {
        Ok(self.working.user_by_email(email).cloned())
    }

    async fn list_users(&mut self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self.working.users.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    async fn insert_user(&mut self, user: &User) -> Result<()> {
        if self.working.users.contains_key(&user.id) {
            return Err(AdminError::conflict(format!("User {} already exists", user.id)));
        }
        if self.working.user_by_email(&user.email).is_some() {
            return Err(AdminError::validation(format!(
                "Email '{}' is already taken",
                user.email
            )));
        }

        debug!("Inserting user {} into memory store", user.id);
        self.working.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update_user(&mut self, user: &User) -> Result<()> {
        if let Some(owner) = self.working.user_by_email(&user.email) {
            if owner.id != user.id {
                return Err(AdminError::validation(format!(
                    "Email '{}' is already taken",
                    user.email
                )));
            }
        }

        match self.working.users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(AdminError::not_found(format!("User {} not found", user.id))),
        }
    }

    async fn delete_user(&mut self, id: &str) -> Result<bool> {
        if self.working.users.remove(id).is_none() {
            return Ok(false);
        }

        self.working.edges.retain(|(user_id, _)| user_id != id);
        self.working.reset_tokens.retain(|stored| stored.token.user_id != id);
        Ok(true)
    }

    async fn find_role(&mut self, id: &str) -> Result<Option<Role>> {
        Ok(self.working.roles.get(id).cloned())
    }

    async fn find_role_by_name(&mut self, name: &str) -> Result<Option<Role>> {
        Ok(self.working.role_by_name(name).cloned())
    }

    async fn list_roles(&mut self) -> Result<Vec<Role>> {
        Ok(sorted_roles(self.working.roles.values()))
    }

    async fn insert_role(&mut self, role: &Role) -> Result<()> {
        if self.working.roles.contains_key(&role.id) {
            return Err(AdminError::conflict(format!("Role {} already exists", role.id)));
        }
        if self.working.role_by_name(&role.name).is_some() {
            return Err(AdminError::validation(format!(
                "Role name '{}' is already taken",
                role.name
            )));
        }

        debug!("Inserting role {} into memory store", role.id);
        self.working.roles.insert(role.id.clone(), role.clone());
        Ok(())
    }

    async fn update_role(&mut self, role: &Role) -> Result<()> {
        let normalized = normalize_role_name(&role.name);
        let taken = self
            .working
            .roles
            .values()
            .any(|other| other.id != role.id && other.normalized_name() == normalized);
        if taken {
            return Err(AdminError::validation(format!(
                "Role name '{}' is already taken",
                role.name
            )));
        }

        match self.working.roles.get_mut(&role.id) {
            Some(existing) => {
                *existing = role.clone();
                Ok(())
            }
            None => Err(AdminError::not_found(format!("Role {} not found", role.id))),
        }
    }

    async fn delete_role(&mut self, id: &str) -> Result<bool> {
        if self.working.edges.iter().any(|(_, role_id)| role_id == id) {
            return Err(AdminError::conflict(format!(
                "Role {} is still referenced by membership edges",
                id
            )));
        }

        Ok(self.working.roles.remove(id).is_some())
    }

    async fn roles_for_user(&mut self, user_id: &str) -> Result<Vec<Role>> {
        let held = self
            .working
            .edges
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .filter_map(|(_, role_id)| self.working.roles.get(role_id));
        Ok(sorted_roles(held))
    }

    async fn count_role_members(&mut self, role_id: &str) -> Result<u64> {
        let count = self
            .working
            .edges
            .iter()
            .filter(|(_, id)| id == role_id)
            .count();
        Ok(count as u64)
    }

    async fn membership_counts(&mut self) -> Result<HashMap<String, u64>> {
        let mut counts = HashMap::new();
        for (_, role_id) in &self.working.edges {
            *counts.entry(role_id.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn insert_edge(&mut self, user_id: &str, role_id: &str) -> Result<bool> {
        if !self.working.users.contains_key(user_id) {
            return Err(AdminError::not_found(format!("User {} not found", user_id)));
        }
        if !self.working.roles.contains_key(role_id) {
            return Err(AdminError::not_found(format!("Role {} not found", role_id)));
        }

        Ok(self
            .working
            .edges
            .insert((user_id.to_string(), role_id.to_string())))
    }

    async fn remove_edge(&mut self, user_id: &str, role_id: &str) -> Result<bool> {
        Ok(self
            .working
            .edges
            .remove(&(user_id.to_string(), role_id.to_string())))
    }

    async fn replace_reset_token(&mut self, token: &PasswordResetToken) -> Result<()> {
        if !self.working.users.contains_key(&token.user_id) {
            return Err(AdminError::not_found(format!(
                "User {} not found",
                token.user_id
            )));
        }

        self.working
            .reset_tokens
            .retain(|stored| stored.token.user_id != token.user_id);
        self.working.reset_tokens.push(StoredResetToken::from(token));
        Ok(())
    }

    async fn consume_reset_token(
        &mut self,
        user_id: &str,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let stored = self.working.reset_tokens.iter_mut().find(|stored| {
            stored.token.user_id == user_id
                && stored.token.token_hash == token_hash
                && stored.used_at.is_none()
                && stored.token.is_live(now)
        });

        match stored {
            Some(stored) => {
                stored.used_at = Some(now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let MemoryTransaction { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }
}
