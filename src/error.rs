use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid fields: {0}")]
    InvalidFields(#[from] ValidationErrors),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// The database stayed locked by another writer past the busy timeout.
    fn is_busy(&self) -> bool {
        let ApiError::Database(sqlx::Error::Database(err)) = self else {
            return false;
        };
        // SQLITE_BUSY (5) and SQLITE_LOCKED (6), including extended codes.
        err.code()
            .and_then(|code| code.parse::<i32>().ok())
            .is_some_and(|code| matches!(code & 0xff, 5 | 6))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            _ if self.is_busy() => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = if status.is_server_error() {
            log::error!("{self}");
            "Internal server error".to_string()
        } else if self.is_busy() {
            log::warn!("Rejected request: {self}");
            "Another request is updating the same booking, please retry".to_string()
        } else {
            log::warn!("Rejected request: {self}");
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorBody {
            success: false,
            error,
        })
    }
}
