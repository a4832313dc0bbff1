//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// URL selecting the in-memory identity store
pub const MEMORY_STORE_URL: &str = "memory://";

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`sqlite://…`, `postgres://…` or `memory://`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a throwaway in-memory SQLite database
    pub fn sqlite_in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            // every connection to sqlite::memory: opens a separate database
            max_connections: 1,
            connection_timeout: default_connection_timeout(),
        }
    }

    /// Whether the URL selects the in-memory identity store
    pub fn is_memory(&self) -> bool {
        self.url == MEMORY_STORE_URL
    }
}
