//! Role administration configuration

use crate::utils::error::AdminError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What `replace_user_roles` does with role names that do not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRolePolicy {
    /// Drop unknown names and apply the rest
    #[default]
    Ignore,
    /// Fail the whole call with a validation error
    Reject,
}

impl FromStr for UnknownRolePolicy {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            other => Err(AdminError::config(format!(
                "Unknown role policy must be 'ignore' or 'reject', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for UnknownRolePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str("ignore"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

/// Role administration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Handling of unknown role names during reassignment
    #[serde(default)]
    pub unknown_role_policy: UnknownRolePolicy,
    /// Roles created at start-up when missing
    #[serde(default = "super::default_admin_roles")]
    pub bootstrap_roles: Vec<String>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            unknown_role_policy: UnknownRolePolicy::default(),
            bootstrap_roles: super::default_admin_roles(),
        }
    }
}
