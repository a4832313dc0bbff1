//! # identity-admin
//!
//! User and role administration with role-based access control over a
//! pluggable identity store.
//!
//! ## Features
//!
//! - **Roles**: create, rename and delete named roles, unique regardless of case
//! - **Users**: create, update and delete accounts with Argon2 credentials
//! - **Memberships**: replace a user's role set atomically
//! - **Accounts**: sign-in with JWT bearer tokens and password reset tokens
//! - **Storage**: SQLite/PostgreSQL through SeaORM, or an in-memory store
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use identity_admin::{AppState, Config, UserProfile, open_store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/identity-admin.yaml").await?;
//!     let store = open_store(config.storage()).await?;
//!     let state = AppState::new(config, store);
//!
//!     let role_id = state.rbac.create_role("Editor").await?;
//!     let user_id = state
//!         .rbac
//!         .create_user(UserProfile::new("ada@example.com"), "s3cret!", Some("Editor"))
//!         .await?;
//!     println!("{} holds {}", user_id, role_id);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{AccountService, CredentialService, JwtHandler, SignedInUser};
pub use config::Config;
pub use core::models::{
    AssignableRole, Role, RoleWithCount, User, UserProfile, UserWithRoles,
};
pub use core::rbac::RbacManager;
pub use server::{AppState, HttpServer};
pub use storage::{IdentityStore, StoreTransaction, open_store};
pub use utils::error::{AdminError, Result};

/// Current version of the service
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the service
pub const NAME: &str = env!("CARGO_PKG_NAME");
