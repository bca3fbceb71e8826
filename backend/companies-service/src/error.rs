/// Error types for companies-service
///
/// Every error is converted to a structured HTTP response at the handler
/// boundary; nothing propagates past it.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for companies-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request carries no resolvable subject
    #[error("Unauthorized")]
    Unauthorized,

    /// Malformed or missing request input
    #[error("{0}")]
    BadRequest(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else that should surface as a 500
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Unauthorized => serde_json::json!({ "message": "Unauthorized" }),
            AppError::BadRequest(msg) => serde_json::json!({ "error": msg }),
            AppError::Database(_) | AppError::Internal(_) => {
                serde_json::json!({ "error": format!("Unexpected server error: {}", self) })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
