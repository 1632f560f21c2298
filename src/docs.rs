use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::public::controller::HealthResponse;
use rolegate_models::{
    AuthResponse, LoginRequest, MessageResponse, ProfileResponse, RegistrationRequest, Role,
    RoleRequest, User, UserStatus, UserStatusRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::admin::controller::add_role,
        crate::modules::admin::controller::update_user_status,
        crate::modules::admin::controller::get_users_by_status,
        crate::modules::admin::controller::get_roles,
        crate::modules::users::controller::get_user_profile,
        crate::modules::users::controller::get_moderator_profile,
        crate::modules::public::controller::health,
    ),
    components(
        schemas(
            User,
            UserStatus,
            Role,
            RegistrationRequest,
            LoginRequest,
            AuthResponse,
            RoleRequest,
            UserStatusRequest,
            MessageResponse,
            ProfileResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Admin", description = "Role and account status management"),
        (name = "Users", description = "Caller profile"),
        (name = "Public", description = "Unauthenticated endpoints")
    ),
    info(
        title = "Rolegate API",
        version = "0.1.0",
        description = "Role-based access control backend with bearer token authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
