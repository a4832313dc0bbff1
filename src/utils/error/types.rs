//! Error types for the identity administration service

use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, AdminError>;

/// Main error type
#[derive(Error, Debug)]
pub enum AdminError {
    /// Bad input shape, duplicate unique field, or policy violation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced id does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation would violate a store invariant
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication errors (bad credentials, bad reset token)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing or unusable bearer credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
