//! Tests for error handling

use super::types::AdminError;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

#[test]
fn test_helpers_build_matching_variants() {
    assert!(matches!(AdminError::validation("bad"), AdminError::Validation(m) if m == "bad"));
    assert!(matches!(AdminError::not_found("gone"), AdminError::NotFound(m) if m == "gone"));
    assert!(matches!(AdminError::conflict("in use"), AdminError::Conflict(m) if m == "in use"));
    assert!(matches!(AdminError::auth("nope"), AdminError::Auth(_)));
    assert!(matches!(AdminError::forbidden("nope"), AdminError::Forbidden(_)));
}

#[test]
fn test_display_includes_category() {
    let error = AdminError::conflict("role is assigned to one or more users");
    assert_eq!(
        error.to_string(),
        "Conflict: role is assigned to one or more users"
    );
}

#[test]
fn test_status_codes() {
    assert_eq!(
        AdminError::validation("x").status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(AdminError::not_found("x").status_code(), StatusCode::NOT_FOUND);
    assert_eq!(AdminError::conflict("x").status_code(), StatusCode::CONFLICT);
    assert_eq!(AdminError::auth("x").status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        AdminError::unauthorized("x").status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(AdminError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
    assert_eq!(
        AdminError::internal("x").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_database_error_is_server_side() {
    let error = AdminError::from(sea_orm::DbErr::Custom("disk full".to_string()));
    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!error.is_client_error());
}

#[test]
fn test_client_error_classification() {
    assert!(AdminError::validation("x").is_client_error());
    assert!(AdminError::conflict("x").is_client_error());
    assert!(!AdminError::config("x").is_client_error());
    assert!(!AdminError::crypto("x").is_client_error());
}
