//! Authentication and security utilities

pub mod crypto;

pub use crypto::{generate_token, hash_password, hash_token, verify_password};
