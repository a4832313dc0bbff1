use crate::config::DatabaseConfig;
use crate::utils::error::{AdminError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase, SeaOrmTransaction};

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = DatabaseBackendType::from_url(&config.url);
        if backend_type == DatabaseBackendType::SQLite {
            ensure_sqlite_directory(&config.url)?;
        }

        let db = Self::try_connect(&config.url, config).await?;
        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    /// Try to connect to a database
    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(AdminError::Database)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            AdminError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Start a transaction
    pub async fn begin_transaction(&self) -> Result<SeaOrmTransaction> {
        debug!("Beginning database transaction");
        let txn = self.db.begin().await.map_err(AdminError::Database)?;
        Ok(SeaOrmTransaction { txn })
    }

    /// Check that the database answers
    pub async fn ping(&self) -> Result<()> {
        self.db.ping().await.map_err(AdminError::Database)
    }
}

impl SeaOrmTransaction {
    /// Commit the transaction
    pub async fn commit(self) -> Result<()> {
        debug!("Committing database transaction");
        self.txn.commit().await.map_err(AdminError::Database)
    }
}

/// Create the parent directory of a file-backed SQLite database
fn ensure_sqlite_directory(url: &str) -> Result<()> {
    let path = url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AdminError::Internal(format!("Failed to create data directory: {}", e))
            })?;
        }
    }

    Ok(())
}
