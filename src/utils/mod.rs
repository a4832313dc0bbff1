//! Utility modules for the identity administration service
//!
//! ## Module Organization
//!
//! - **auth**: Credential hashing and token generation primitives
//! - **error**: Error type, HTTP mapping and helpers
//! - **logging**: `tracing` subscriber initialization
//! - **validation**: Input validation for emails, passwords and role names

pub mod auth;
pub mod error;
pub mod logging;
pub mod validation;

pub use error::{AdminError, Result};
pub use validation::DataValidator;
