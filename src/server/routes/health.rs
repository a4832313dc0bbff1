//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use std::borrow::Cow;
use tracing::{debug, error};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Service and store health
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub store: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_hash: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_time: Option<Cow<'static, str>>,
}

/// Reports 200 when the store answers, 503 otherwise
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(e) => {
            error!("Store health check failed: {}", e);
            false
        }
    };

    let status = HealthStatus {
        status: Cow::Borrowed(if healthy { "healthy" } else { "unhealthy" }),
        store: Cow::Borrowed(state.store.backend_name()),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(crate::VERSION),
        git_hash: option_env!("GIT_HASH").map(Cow::Borrowed),
        build_time: option_env!("BUILD_TIME").map(Cow::Borrowed),
    };

    if healthy {
        HttpResponse::Ok().json(ApiResponse::success(status))
    } else {
        HttpResponse::ServiceUnavailable().json(ApiResponse::success(status))
    }
}
