//! Core data models for the identity administration service
//!
//! This module defines the users, roles and membership views shared by the
//! store backends, the role manager and the HTTP layer.

pub mod role;
pub mod token;
pub mod user;

pub use role::*;
pub use token::*;
pub use user::*;
