//! Authentication and credential management
//!
//! - `password`: the [`CredentialHasher`] seam and its Argon2 implementation
//! - `credentials`: hashing plus the password-reset token lifecycle
//! - `account`: sign-in, forgot-password and reset-password flows
//! - `jwt`: bearer token issuance and verification

pub mod account;
pub mod credentials;
pub mod jwt;
pub mod password;

pub use account::{AccountService, ResetPasswordRequest, SignedInUser};
pub use credentials::CredentialService;
pub use jwt::{Claims, JwtHandler};
pub use password::{Argon2CredentialHasher, CredentialHasher};

/// Token length, in alphanumeric characters, of password-reset tokens
pub const RESET_TOKEN_LENGTH: usize = 32;
