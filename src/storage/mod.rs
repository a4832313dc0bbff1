//! Storage layer for the identity administration service
//!
//! The role manager only sees the [`IdentityStore`] and [`StoreTransaction`]
//! traits. Two backends implement them: SeaORM over SQLite/PostgreSQL and an
//! in-memory store used by tests and throwaway deployments.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

use crate::config::StorageConfig;
use crate::core::models::{PasswordResetToken, Role, User};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::info;

/// Durable persistence for users, roles and membership edges
#[async_trait]
pub trait IdentityStore: Send + Sync + Debug {
    /// Start a transaction; it rolls back unless committed
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>>;

    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;

    /// Check that the backend is reachable
    async fn health_check(&self) -> Result<()>;
}

/// One unit of work against the identity store
///
/// Dropping a transaction without calling [`StoreTransaction::commit`]
/// discards every write made through it.
#[async_trait]
pub trait StoreTransaction: Send {
    /// Find a user by identifier
    async fn find_user(&mut self, id: &str) -> Result<Option<User>>;

    /// Find a user by (already normalized) email
    async fn find_user_by_email(&mut self, email: &str) -> Result<Option<User>>;

    /// All users ordered by email
    async fn list_users(&mut self) -> Result<Vec<User>>;

    /// Insert a new user
    async fn insert_user(&mut self, user: &User) -> Result<()>;

    /// Overwrite an existing user's row
    async fn update_user(&mut self, user: &User) -> Result<()>;

    /// Delete a user together with its membership edges and reset tokens
    async fn delete_user(&mut self, id: &str) -> Result<bool>;

    /// Find a role by identifier
    async fn find_role(&mut self, id: &str) -> Result<Option<Role>>;

    /// Find a role by name, ignoring case and surrounding whitespace
    async fn find_role_by_name(&mut self, name: &str) -> Result<Option<Role>>;

    /// All roles ordered by name
    async fn list_roles(&mut self) -> Result<Vec<Role>>;

    /// Insert a new role
    async fn insert_role(&mut self, role: &Role) -> Result<()>;

    /// Overwrite an existing role's row
    async fn update_role(&mut self, role: &Role) -> Result<()>;

    /// Delete a role; fails while membership edges reference it
    async fn delete_role(&mut self, id: &str) -> Result<bool>;

    /// Roles held by a user, ordered by name
    async fn roles_for_user(&mut self, user_id: &str) -> Result<Vec<Role>>;

    /// Number of users holding a role
    async fn count_role_members(&mut self, role_id: &str) -> Result<u64>;

    /// Membership count per role identifier; roles without members are absent
    async fn membership_counts(&mut self) -> Result<HashMap<String, u64>>;

    /// Add a membership edge; returns `false` if it already existed
    async fn insert_edge(&mut self, user_id: &str, role_id: &str) -> Result<bool>;

    /// Remove a membership edge; returns `false` if it did not exist
    async fn remove_edge(&mut self, user_id: &str, role_id: &str) -> Result<bool>;

    /// Store a reset token, discarding any earlier token of the same user
    async fn replace_reset_token(&mut self, token: &PasswordResetToken) -> Result<()>;

    /// Mark a live, unused token as used; returns whether one was found
    async fn consume_reset_token(
        &mut self,
        user_id: &str,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool>;

    /// Apply every write made through this transaction
    async fn commit(self: Box<Self>) -> Result<()>;
}

/// Open the identity store selected by the configuration
///
/// SQL backends are migrated before they are returned.
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn IdentityStore>> {
    if config.database.is_memory() {
        info!("Using in-memory identity store");
        return Ok(Arc::new(memory::MemoryStore::new()));
    }

    let database = database::Database::new(&config.database).await?;
    database.migrate().await?;
    Ok(Arc::new(database))
}
