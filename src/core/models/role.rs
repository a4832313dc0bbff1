//! Role models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Opaque stable identifier (UUIDv4)
    pub id: String,
    /// Display name, unique ignoring case
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Create a new role with a fresh identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Key used for uniqueness checks and ordering
    pub fn normalized_name(&self) -> String {
        normalize_role_name(&self.name)
    }
}

/// Canonical form of a role name
pub fn normalize_role_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Role annotated with the number of users holding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleWithCount {
    /// The role
    #[serde(flatten)]
    pub role: Role,
    /// Membership count, computed from the edge set
    pub member_count: u64,
}

/// Role paired with whether a given user currently holds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignableRole {
    /// Role identifier
    pub role_id: String,
    /// Role name
    pub role_name: String,
    /// Whether the user holds the role
    pub selected: bool,
}
