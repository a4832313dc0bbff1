//! Core functionality for the identity administration service
//!
//! Domain models and the role administration manager.

pub mod models;
pub mod rbac;
