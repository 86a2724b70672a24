use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared_types::ErrorResponse;

use crate::database::DbError;

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Duplicate(String),
    Unauthorized,
    Internal(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::Duplicate(msg) => write!(f, "{}", msg),
            ApiError::Unauthorized => write!(f, "Admin password required"),
            ApiError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            ApiError::Internal(detail) => ErrorResponse {
                message: "Internal server error".to_string(),
                error: detail.clone(),
            },
            other => ErrorResponse {
                message: other.to_string(),
                error: status
                    .canonical_reason()
                    .unwrap_or("Error")
                    .to_string(),
            },
        };

        HttpResponse::build(status).json(body)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound(_) => ApiError::NotFound(e.to_string()),
            DbError::Duplicate(msg) => ApiError::Duplicate(msg.to_string()),
            DbError::Database(_) => {
                tracing::error!("{}", e);
                ApiError::Internal(e.to_string())
            }
        }
    }
}

/// Rejects a required text field that is empty or whitespace
pub fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Same as [`require_text`] for fields of a partial update, where absence is fine
pub fn reject_blank(field: &str, value: Option<&String>) -> Result<(), ApiError> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}
