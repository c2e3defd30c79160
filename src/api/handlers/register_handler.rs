//! Registration handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{REGISTRATION_FAILED_MESSAGE, REGISTRATION_SUCCESS_MESSAGE};
use crate::domain::{NewUser, UserSummary};
use crate::types::{ApiResponse, Created, Failure};

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User display name
    #[validate(
        custom(function = "not_blank", message = "The name field is required"),
        length(max = 255, message = "The name may not exceed 255 characters")
    )]
    #[schema(example = "Ana")]
    pub name: String,
    /// User email address
    #[validate(
        email(message = "The email must be a valid email address"),
        length(max = 255, message = "The email may not exceed 255 characters")
    )]
    #[schema(example = "ana@example.com")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[validate(length(min = 8, message = "The password must be at least 8 characters"))]
    #[schema(example = "Secret123!", min_length = 8)]
    pub password: String,
}

/// Reject values that are empty once surrounding whitespace is trimmed
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

/// `data` member of a successful registration
#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationData {
    pub user: UserSummary,
}

/// Body of a successful registration
#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "User registered successfully. A welcome email has been sent.")]
    pub message: String,
    pub data: RegistrationData,
}

/// Create registration routes
pub fn register_routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

/// Register a new user and queue their welcome email
#[utoipa::path(
    post,
    path = "/register",
    tag = "Registration",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, welcome email queued", body = RegistrationResponse),
        (status = 422, description = "Validation error", body = FailureBody),
        (status = 500, description = "Registration failed", body = FailureBody)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Response {
    match state.registration_service.register(payload.into()).await {
        Ok(user) => {
            let data = RegistrationData {
                user: UserSummary::from(user),
            };
            Created(ApiResponse::with_message(data, REGISTRATION_SUCCESS_MESSAGE)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Registration failed");
            Failure::internal(REGISTRATION_FAILED_MESSAGE, e.to_string()).into_response()
        }
    }
}
