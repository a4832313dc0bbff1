//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod account;
pub mod health;
pub mod models;
pub mod roles;
pub mod users;

use crate::utils::error::AdminError;
use actix_web::web;

/// Success envelope; failures are rendered as `ErrorResponse`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

/// Register every route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(account::configure_routes)
        .service(
            web::scope("/admin")
                .configure(roles::configure_routes)
                .configure(users::configure_routes),
        );
}

/// JSON extractor configuration: malformed bodies become validation errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| AdminError::validation(format!("Invalid request body: {}", err)).into())
}
