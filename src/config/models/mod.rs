//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

pub mod auth;
pub mod logging;
pub mod rbac;
pub mod server;
pub mod service;
pub mod storage;

// Re-export all configuration types
pub use auth::*;
pub use logging::*;
pub use rbac::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default database URL
pub fn default_database_url() -> String {
    "sqlite://data/identity-admin.db?mode=rwc".to_string()
}

/// Default JWT expiration in seconds
pub fn default_jwt_expiration() -> u64 {
    3600
}

/// Default password reset token lifetime in seconds
pub fn default_reset_token_ttl() -> u64 {
    3600
}

/// Default base URL for password reset links
pub fn default_reset_base_url() -> String {
    "http://localhost:8080/account/reset-password".to_string()
}

/// Default administrator role names
pub fn default_admin_roles() -> Vec<String> {
    vec!["Admin".to_string()]
}

/// Default log filter
pub fn default_log_level() -> String {
    "info".to_string()
}
