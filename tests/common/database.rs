//! Test database utilities
//!
//! Each test gets an isolated, migrated in-memory SQLite database.

use identity_admin::config::DatabaseConfig;
use identity_admin::storage::IdentityStore;
use identity_admin::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create and migrate a new in-memory database
    pub async fn new() -> Self {
        let db = Database::new(&DatabaseConfig::sqlite_in_memory())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// The database as a type-erased identity store
    pub fn store(&self) -> Arc<dyn IdentityStore> {
        self.inner.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().ping().await.is_ok());
        assert!(db.store().health_check().await.is_ok());
        assert_eq!(db.store().backend_name(), "sqlite");
    }

    #[tokio::test]
    async fn test_migrations_are_repeatable() {
        let db = TestDatabase::new().await;
        assert!(db.db().migrate().await.is_ok());
    }
}
