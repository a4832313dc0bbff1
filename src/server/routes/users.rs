//! User administration endpoints

use super::models::{CreateUserRequest, CreatedResponse, ReplaceRolesRequest, UpdateUserRequest};
use crate::server::middleware::AdminIdentity;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::info;

/// Configure user routes (mounted under `/admin`)
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user)),
    )
    .service(
        web::resource("/users/{id}")
            .route(web::put().to(update_user))
            .route(web::delete().to(delete_user)),
    )
    .service(
        web::resource("/users/{id}/roles")
            .route(web::get().to(user_roles))
            .route(web::put().to(replace_user_roles)),
    );
}

async fn list_users(state: web::Data<AppState>, _admin: AdminIdentity) -> Result<HttpResponse> {
    let users = state.rbac.list_users_with_roles().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(users)))
}

async fn create_user(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let profile = request.validated_profile()?;
    let id = state
        .rbac
        .create_user(profile, &request.password, request.role.as_deref())
        .await?;
    info!("User {} created by {}", id, admin.0.sub);

    Ok(HttpResponse::Created().json(ApiResponse::success(CreatedResponse { id })))
}

async fn update_user(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    path: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    let profile = request.validated_profile()?;
    let user = state
        .rbac
        .update_user(&user_id, profile, request.new_password())
        .await?;
    info!("User {} updated by {}", user_id, admin.0.sub);

    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}

async fn delete_user(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    state.rbac.delete_user(&user_id).await?;
    info!("User {} deleted by {}", user_id, admin.0.sub);

    Ok(HttpResponse::NoContent().finish())
}

async fn user_roles(
    state: web::Data<AppState>,
    _admin: AdminIdentity,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let roles = state.rbac.assignable_roles_for_user(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(roles)))
}

async fn replace_user_roles(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    path: web::Path<String>,
    request: web::Json<ReplaceRolesRequest>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    let roles = state
        .rbac
        .replace_user_roles(&user_id, &request.roles)
        .await?;
    info!("Roles of user {} replaced by {}: {:?}", user_id, admin.0.sub, roles);

    Ok(HttpResponse::Ok().json(ApiResponse::success(roles)))
}
