use crate::core::models::{PasswordResetToken, Role, User, normalize_role_name};
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap};

/// Complete contents of the in-memory store
#[derive(Debug, Clone, Default)]
pub(super) struct MemoryState {
    pub users: HashMap<String, User>,
    pub roles: HashMap<String, Role>,
    /// (user id, role id)
    pub edges: BTreeSet<(String, String)>,
    pub reset_tokens: Vec<StoredResetToken>,
}

impl MemoryState {
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }

    pub fn role_by_name(&self, name: &str) -> Option<&Role> {
        let normalized = normalize_role_name(name);
        self.roles
            .values()
            .find(|role| role.normalized_name() == normalized)
    }
}

/// Clone roles in the same order the SQL backend returns them
pub(super) fn sorted_roles<'a>(roles: impl Iterator<Item = &'a Role>) -> Vec<Role> {
    let mut sorted: Vec<Role> = roles.cloned().collect();
    sorted.sort_by(|a, b| {
        a.normalized_name()
            .cmp(&b.normalized_name())
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

/// Reset token plus the time it was consumed
#[derive(Debug, Clone)]
pub(super) struct StoredResetToken {
    pub token: PasswordResetToken,
    pub used_at: Option<DateTime<Utc>>,
}

impl From<&PasswordResetToken> for StoredResetToken {
    fn from(token: &PasswordResetToken) -> Self {
        Self {
            token: token.clone(),
            used_at: None,
        }
    }
}
