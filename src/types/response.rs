use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Created response helper for POST endpoints
pub struct Created<T: Serialize>(pub ApiResponse<T>);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// Failure body: `{ "success": false, "message": ..., "error": ... }`
#[derive(Debug, Serialize, ToSchema)]
pub struct FailureBody {
    /// Always false
    #[schema(example = false)]
    pub success: bool,
    /// Summary of what failed
    #[schema(example = "Registration failed")]
    pub message: String,
    /// Underlying error detail
    #[schema(example = "Duplicate entry: users_email_key")]
    pub error: String,
}

/// Failed response with explicit status
pub struct Failure {
    status: StatusCode,
    body: FailureBody,
}

impl Failure {
    pub fn new(status: StatusCode, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status,
            body: FailureBody {
                success: false,
                message: message.into(),
                error: error.into(),
            },
        }
    }

    /// 500 response
    pub fn internal(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, error)
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}
