//! Random token generation and digesting

use rand::{Rng, distributions::Alphanumeric};
use sha2::{Digest, Sha256};

/// Generate a random alphanumeric token
pub fn generate_token(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generate a signing secret
pub fn generate_secret() -> String {
    generate_token(64)
}

/// SHA-256 hex digest of a token, the only form in which tokens are stored
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
