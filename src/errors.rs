//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::config::VALIDATION_FAILED_MESSAGE;
use crate::types::Failure;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Unique constraint rejected by the store
    #[error("Duplicate entry: {0}")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error: {0}")]
    Database(DbErr),

    #[error("Queue error: {0}")]
    Queue(String),

    // Internal
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::Conflict(detail),
            _ => AppError::Database(err),
        }
    }
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Queue(_) => "QUEUE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Queue(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message and detail (hides internal details)
    fn user_message(&self) -> (String, String) {
        match self {
            // Show full detail for client errors
            AppError::Validation(msg) => (VALIDATION_FAILED_MESSAGE.to_string(), msg.clone()),
            AppError::Conflict(msg) => ("Resource already exists".to_string(), msg.clone()),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                ("A database error occurred".to_string(), self.code().to_string())
            }
            AppError::Queue(msg) => {
                tracing::error!("Queue error: {}", msg);
                ("A queue error occurred".to_string(), self.code().to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ("An internal error occurred".to_string(), self.code().to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, error) = self.user_message();

        Failure::new(status, message, error).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn queue(msg: impl Into<String>) -> Self {
        AppError::Queue(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
