//! Administrator guard

use super::helpers::extract_bearer_token;
use crate::auth::Claims;
use crate::server::state::AppState;
use crate::utils::error::{AdminError, Result};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{Ready, ready};
use tracing::{debug, warn};

/// Claims of a caller holding one of the configured administrator roles
///
/// Taking this extractor as a handler argument guards the route: a missing
/// or invalid bearer token is rejected with 401, a token without an
/// administrator role with 403.
#[derive(Debug, Clone)]
pub struct AdminIdentity(pub Claims);

impl FromRequest for AdminIdentity {
    type Error = AdminError;
    type Future = Ready<Result<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authorize(req))
    }
}

fn authorize(req: &HttpRequest) -> Result<AdminIdentity> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AdminError::internal("Application state is not configured"))?;

    let token = extract_bearer_token(req.headers())
        .ok_or_else(|| AdminError::unauthorized("Missing bearer token"))?;

    let claims = state.jwt.verify_token(token).map_err(|e| {
        warn!("Rejected bearer token on {}: {}", req.path(), e);
        AdminError::unauthorized("Invalid or expired token")
    })?;

    if !claims.has_any_role(&state.config.auth().admin_roles) {
        warn!("User {} lacks an administrator role for {}", claims.sub, req.path());
        return Err(AdminError::forbidden("Administrator role required"));
    }

    debug!("Administrator {} authorized for {}", claims.sub, req.path());
    Ok(AdminIdentity(claims))
}
