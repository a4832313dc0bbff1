//! Account endpoints: sign-in and password reset

use super::models::{ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest};
use crate::auth::ResetPasswordRequest;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use crate::utils::logging::mask_email;
use actix_web::{HttpResponse, web};
use tracing::info;

/// Configure account routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/account")
            .route("/login", web::post().to(login))
            .route("/forgot-password", web::post().to(forgot_password))
            .route("/reset-password", web::post().to(reset_password)),
    );
}

/// Exchange email and password for a bearer token
async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    info!("Login attempt for {}", mask_email(&request.email));

    let signed_in = state
        .accounts
        .sign_in(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(signed_in)))
}

async fn forgot_password(
    state: web::Data<AppState>,
    request: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse> {
    let link = state.accounts.forgot_password(&request.email).await?;

    let response = ForgotPasswordResponse {
        message: "If the account exists, a password reset link has been issued".to_string(),
        reset_link: link.filter(|_| state.config.auth().expose_reset_link),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

async fn reset_password(
    state: web::Data<AppState>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse> {
    state.accounts.reset_password(&request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "message": "Password has been reset"
    }))))
}
