//! Password reset token model

use chrono::{DateTime, Utc};

/// Stored password reset token; only the digest of the secret is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetToken {
    /// Owner of the token
    pub user_id: String,
    /// SHA-256 hex digest of the token handed to the user
    pub token_hash: String,
    /// Expiry timestamp
    pub expires_at: DateTime<Utc>,
    /// Issue timestamp
    pub created_at: DateTime<Utc>,
}

impl PasswordResetToken {
    /// Whether the token is still within its lifetime at `now`
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}
