//! Error handling for the identity administration service
//!
//! This module defines the error taxonomy shared by the store, the RBAC core
//! and the HTTP/CLI surfaces.

mod helpers;
mod response;
#[cfg(test)]
mod tests;
mod types;

pub use response::ErrorResponse;
pub use types::{AdminError, Result};
