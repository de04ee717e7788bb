//! OpenAPI documentation configuration.

use crate::{controllers::health_controller::HealthResponse, state::UsersBinding};
use gateway_core::{ErrorEnvelope, PaginationRequest};
use gateway_service::{CreateUserInput, SocialMedia, UpdateUserInput, User};
use utoipa::OpenApi;

/// OpenAPI documentation for the users gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Gateway API",
        version = "1.0.0",
        description = "HTTP gateway in front of the remote users service",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::find_all_users,
        crate::controllers::user_controller::find_one_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::remove_user,
        crate::controllers::user_controller::email_users,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            User,
            SocialMedia,
            CreateUserInput,
            UpdateUserInput,
            PaginationRequest,
            ErrorEnvelope,
            HealthResponse,
            UsersBinding,
        )
    ),
    tags(
        (name = "users", description = "User management forwarded to the users service"),
        (name = "health", description = "Gateway and users binding status")
    )
)]
pub struct ApiDoc;
