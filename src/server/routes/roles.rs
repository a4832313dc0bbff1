//! Role administration endpoints

use super::models::{CreatedResponse, RoleRequest};
use crate::server::middleware::AdminIdentity;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::info;

/// Configure role routes (mounted under `/admin`)
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/roles")
            .route(web::get().to(list_roles))
            .route(web::post().to(create_role)),
    )
    .service(
        web::resource("/roles/{id}")
            .route(web::put().to(rename_role))
            .route(web::delete().to(delete_role)),
    );
}

async fn list_roles(state: web::Data<AppState>, _admin: AdminIdentity) -> Result<HttpResponse> {
    let roles = state.rbac.list_roles().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(roles)))
}

async fn create_role(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    request: web::Json<RoleRequest>,
) -> Result<HttpResponse> {
    let id = state.rbac.create_role(&request.name).await?;
    info!("Role {} created by {}", id, admin.0.sub);

    Ok(HttpResponse::Created().json(ApiResponse::success(CreatedResponse { id })))
}

async fn rename_role(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    path: web::Path<String>,
    request: web::Json<RoleRequest>,
) -> Result<HttpResponse> {
    let role_id = path.into_inner();
    state.rbac.rename_role(&role_id, &request.name).await?;
    info!("Role {} renamed by {}", role_id, admin.0.sub);

    Ok(HttpResponse::NoContent().finish())
}

async fn delete_role(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let role_id = path.into_inner();
    state.rbac.delete_role(&role_id).await?;
    info!("Role {} deleted by {}", role_id, admin.0.sub);

    Ok(HttpResponse::NoContent().finish())
}
