//! Validators for configuration sections

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.storage
            .validate()
            .map_err(|e| format!("Storage config error: {}", e))?;
        self.auth
            .validate()
            .map_err(|e| format!("Auth config error: {}", e))?;
        self.rbac
            .validate()
            .map_err(|e| format!("RBAC config error: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.trim().is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        self.database.validate()
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating database configuration");

        if self.url.trim().is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        let supported = self.is_memory()
            || self.url.starts_with("sqlite:")
            || self.url.starts_with("postgres://")
            || self.url.starts_with("postgresql://");
        if !supported {
            return Err(format!("Unsupported database URL scheme: {}", self.url));
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating auth configuration");

        if self.jwt_secret.len() < 32 {
            return Err("JWT secret should be at least 32 characters long".to_string());
        }

        const PLACEHOLDER_PREFIXES: [&str; 3] = ["your-secret", "change-me", "replace-with"];
        if PLACEHOLDER_PREFIXES
            .iter()
            .any(|prefix| self.jwt_secret.starts_with(prefix))
        {
            return Err("JWT secret must not use a placeholder value".to_string());
        }

        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.jwt_expiration > 86400 * 30 {
            return Err("JWT expiration should not exceed 30 days".to_string());
        }

        if self.admin_roles.iter().all(|role| role.trim().is_empty()) {
            return Err("At least one administrator role must be configured".to_string());
        }

        if self.reset_token_ttl == 0 {
            return Err("Reset token lifetime must be greater than 0".to_string());
        }

        if self.reset_token_ttl > 86400 * 30 {
            return Err("Reset token lifetime should not exceed 30 days".to_string());
        }

        url::Url::parse(&self.reset_base_url)
            .map_err(|e| format!("Invalid reset base URL: {}", e))?;

        self.password_policy.validate()
    }
}

impl Validate for PasswordPolicy {
    fn validate(&self) -> Result<(), String> {
        if self.min_length == 0 {
            return Err("Minimum password length must be greater than 0".to_string());
        }

        if self.max_length < self.min_length {
            return Err(format!(
                "Maximum password length ({}) is below the minimum ({})",
                self.max_length, self.min_length
            ));
        }

        Ok(())
    }
}

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bootstrap_roles.iter().any(|role| role.trim().is_empty()) {
            return Err("Bootstrap role names cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log filter '{}': {}", self.level, e))
    }
}
