//! Logging initialization
//!
//! The binary calls [`init_logging`] once; `RUST_LOG` overrides the configured level.

use crate::config::LoggingConfig;
use crate::utils::error::{AdminError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AdminError::Config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| AdminError::Internal(format!("Failed to initialize logging: {}", e)))
}

/// Mask the local part of an email for log output
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
