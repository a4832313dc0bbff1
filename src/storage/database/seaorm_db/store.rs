use crate::core::models::{PasswordResetToken, Role, User};
use crate::storage::{IdentityStore, StoreTransaction};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::types::{SeaOrmDatabase, SeaOrmTransaction};

#[async_trait]
impl IdentityStore for SeaOrmDatabase {
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>> {
        Ok(Box::new(self.begin_transaction().await?))
    }

    fn backend_name(&self) -> &'static str {
        self.backend_type.as_str()
    }

    async fn health_check(&self) -> Result<()> {
        self.ping().await
    }
}

#[async_trait]
impl StoreTransaction for SeaOrmTransaction {
    async fn find_user(&mut self, id: &str) -> Result<Option<User>> {
        self.find_user_by_id(id).await
    }

    async fn find_user_by_email(&mut self, email: &str) -> Result<Option<User>> {
        SeaOrmTransaction::find_user_by_email(self, email).await
    }

    async fn list_users(&mut self) -> Result<Vec<User>> {
        self.list_users_by_email().await
    }

    async fn insert_user(&mut self, user: &User) -> Result<()> {
        self.create_user(user).await
    }

    async fn update_user(&mut self, user: &User) -> Result<()> {
        self.save_user(user).await
    }

    async fn delete_user(&mut self, id: &str) -> Result<bool> {
        self.delete_user_cascade(id).await
    }

    async fn find_role(&mut self, id: &str) -> Result<Option<Role>> {
        self.find_role_by_id(id).await
    }

    async fn find_role_by_name(&mut self, name: &str) -> Result<Option<Role>> {
        self.find_role_by_normalized_name(name).await
    }

    async fn list_roles(&mut self) -> Result<Vec<Role>> {
        self.list_roles_by_name().await
    }

    async fn insert_role(&mut self, role: &Role) -> Result<()> {
        self.create_role(role).await
    }

    async fn update_role(&mut self, role: &Role) -> Result<()> {
        self.save_role(role).await
    }

    async fn delete_role(&mut self, id: &str) -> Result<bool> {
        self.delete_role_by_id(id).await
    }

    async fn roles_for_user(&mut self, user_id: &str) -> Result<Vec<Role>> {
        self.find_roles_for_user(user_id).await
    }

    async fn count_role_members(&mut self, role_id: &str) -> Result<u64> {
        self.count_members(role_id).await
    }

    async fn membership_counts(&mut self) -> Result<HashMap<String, u64>> {
        self.count_members_per_role().await
    }

    async fn insert_edge(&mut self, user_id: &str, role_id: &str) -> Result<bool> {
        self.add_membership(user_id, role_id).await
    }

    async fn remove_edge(&mut self, user_id: &str, role_id: &str) -> Result<bool> {
        self.remove_membership(user_id, role_id).await
    }

    async fn replace_reset_token(&mut self, token: &PasswordResetToken) -> Result<()> {
        self.store_password_reset_token(token).await
    }

    async fn consume_reset_token(
        &mut self,
        user_id: &str,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        self.verify_password_reset_token(user_id, token_hash, now)
            .await
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        SeaOrmTransaction::commit(*self).await
    }
}
