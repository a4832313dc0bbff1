// Module declarations
mod connection;
mod edge_ops;
mod errors;
mod role_ops;
mod store;
mod token_ops;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase, SeaOrmTransaction};
