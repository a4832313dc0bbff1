//! HTTP response handling for errors

use super::types::AdminError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for AdminError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdminError::Validation(_) => StatusCode::BAD_REQUEST,
            AdminError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminError::Conflict(_) => StatusCode::CONFLICT,
            AdminError::Auth(_) | AdminError::Unauthorized(_) | AdminError::Jwt(_) => {
                StatusCode::UNAUTHORIZED
            }
            AdminError::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AdminError::Validation(_) => ("VALIDATION_ERROR", self.to_string()),
            AdminError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            AdminError::Conflict(_) => ("CONFLICT", self.to_string()),
            AdminError::Auth(_) => ("AUTH_ERROR", self.to_string()),
            AdminError::Unauthorized(_) => ("UNAUTHORIZED", self.to_string()),
            AdminError::Jwt(_) => ("UNAUTHORIZED", "Invalid or expired token".to_string()),
            AdminError::Forbidden(_) => ("FORBIDDEN", self.to_string()),
            AdminError::Database(_) => (
                "DATABASE_ERROR",
                "Database operation failed".to_string(),
            ),
            _ => (
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            success: false,
            error: message,
            code: error_code.to_string(),
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Error body, shaped like a failed `ApiResponse` plus a machine-readable code
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}
