//! Top-level service configuration

use super::*;
use crate::utils::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Prefix shared by every environment variable the service reads
pub const ENV_PREFIX: &str = "IDENTITY_ADMIN_";

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Role administration configuration
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Build a configuration from defaults overridden by `IDENTITY_ADMIN_*` variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = env_var("HOST") {
            config.server.host = host;
        }
        if let Some(port) = env_var("PORT") {
            config.server.port = parse_env("PORT", &port)?;
        }
        if let Some(url) = env_var("DATABASE_URL") {
            config.storage.database.url = url;
        }
        if let Some(max) = env_var("DATABASE_MAX_CONNECTIONS") {
            config.storage.database.max_connections = parse_env("DATABASE_MAX_CONNECTIONS", &max)?;
        }
        if let Some(secret) = env_var("JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }
        if let Some(expiration) = env_var("JWT_EXPIRATION") {
            config.auth.jwt_expiration = parse_env("JWT_EXPIRATION", &expiration)?;
        }
        if let Some(roles) = env_var("ADMIN_ROLES") {
            config.auth.admin_roles = split_list(&roles);
        }
        if let Some(min_length) = env_var("PASSWORD_MIN_LENGTH") {
            config.auth.password_policy.min_length = parse_env("PASSWORD_MIN_LENGTH", &min_length)?;
        }
        if let Some(url) = env_var("RESET_BASE_URL") {
            config.auth.reset_base_url = url;
        }
        if let Some(ttl) = env_var("RESET_TOKEN_TTL") {
            config.auth.reset_token_ttl = parse_env("RESET_TOKEN_TTL", &ttl)?;
        }
        if let Some(policy) = env_var("UNKNOWN_ROLE_POLICY") {
            config.rbac.unknown_role_policy = policy.parse()?;
        }
        if let Some(roles) = env_var("BOOTSTRAP_ROLES") {
            config.rbac.bootstrap_roles = split_list(&roles);
        }
        if let Some(level) = env_var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = env_var("LOG_JSON") {
            config.logging.json = parse_env("LOG_JSON", &json)?;
        }

        Ok(config)
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(format!("{}{}", ENV_PREFIX, name))
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        AdminError::config(format!(
            "Invalid value for {}{}: {}",
            ENV_PREFIX, name, value
        ))
    })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
