//! Password hashing seam

use crate::utils::auth::crypto;
use crate::utils::error::Result;

/// Turns raw passwords into opaque credentials and checks them
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash a raw password
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a raw password against a stored credential
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Argon2id hasher with the library's default parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2CredentialHasher;

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<String> {
        crypto::hash_password(password)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        crypto::verify_password(password, hash)
    }
}
