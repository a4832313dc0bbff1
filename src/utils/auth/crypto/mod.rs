//! Cryptographic primitives
//!
//! - `password`: Argon2 password hashing and verification
//! - `keys`: random token generation and digesting

mod keys;
mod password;

pub use keys::{generate_secret, generate_token, hash_token};
pub use password::{hash_password, verify_password};
