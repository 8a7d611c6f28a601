//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl AppError {
    /// HTTP status and numeric error code for this error.
    fn status_and_code(&self) -> (StatusCode, u16) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, 10002),
            AppError::Conflict(_) => (StatusCode::CONFLICT, 10005),
            AppError::Internal(_) | AppError::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, 10000)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::BadRequest(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".into()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Internal server error".into()
            }
        };

        (status, Json(ErrorResponse { code, message })).into_response()
    }
}
