//! Authentication configuration

use super::*;
use crate::utils::auth::crypto::generate_secret;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT secret
    #[serde(default = "generate_secure_jwt_secret")]
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Roles allowed to use the administration endpoints
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
    /// Password policy applied to new credentials
    #[serde(default)]
    pub password_policy: PasswordPolicy,
    /// Password reset token lifetime in seconds
    #[serde(default = "default_reset_token_ttl")]
    pub reset_token_ttl: u64,
    /// Base URL that reset links point at
    #[serde(default = "default_reset_base_url")]
    pub reset_base_url: String,
    /// Return the reset link in the forgot-password response (development only)
    #[serde(default)]
    pub expose_reset_link: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            admin_roles: default_admin_roles(),
            password_policy: PasswordPolicy::default(),
            reset_token_ttl: default_reset_token_ttl(),
            reset_base_url: default_reset_base_url(),
            expose_reset_link: false,
        }
    }
}

impl AuthConfig {
    /// Reset token lifetime
    pub fn reset_token_ttl(&self) -> Duration {
        Duration::from_secs(self.reset_token_ttl)
    }
}

/// Password policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length in characters
    #[serde(default = "default_min_password_length")]
    pub min_length: usize,
    /// Maximum length in characters
    #[serde(default = "default_max_password_length")]
    pub max_length: usize,
    /// Require an uppercase letter
    #[serde(default)]
    pub require_uppercase: bool,
    /// Require a lowercase letter
    #[serde(default)]
    pub require_lowercase: bool,
    /// Require a digit
    #[serde(default)]
    pub require_digit: bool,
    /// Require a non-alphanumeric character
    #[serde(default)]
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_password_length(),
            max_length: default_max_password_length(),
            require_uppercase: false,
            require_lowercase: false,
            require_digit: false,
            require_special: false,
        }
    }
}

fn default_min_password_length() -> usize {
    6
}

fn default_max_password_length() -> usize {
    100
}

/// Generate a secure random JWT secret
fn generate_secure_jwt_secret() -> String {
    generate_secret()
}
