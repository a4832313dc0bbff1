//! SQL identity store
//!
//! Users, roles, membership edges and reset tokens in SQLite or PostgreSQL
//! through SeaORM. The schema is created by the bundled migrations.

/// Table models
pub mod entities;
/// Schema migrations
pub mod migration;
/// Connection handling and the store implementation
pub mod seaorm_db;

pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::{DatabaseBackendType, SeaOrmTransaction};
