//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::register_handler;
use crate::domain::UserSummary;
use crate::types::FailureBody;

/// OpenAPI documentation for the Registration API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration API",
        version = "0.1.0",
        description = "User registration with queued welcome emails",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(register_handler::register),
    components(
        schemas(
            UserSummary,
            FailureBody,
            register_handler::RegisterRequest,
            register_handler::RegistrationData,
            register_handler::RegistrationResponse,
        )
    ),
    tags(
        (name = "Registration", description = "Account registration")
    )
)]
pub struct ApiDoc;
