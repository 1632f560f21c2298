use axum::Json;
use rolegate_models::ProfileResponse;

use crate::middleware::auth::AuthenticatedUser;
use crate::modules::auth::controller::ErrorResponse;

fn profile(user: AuthenticatedUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        email: user.email,
        roles: user.roles,
        status: user.status,
    })
}

/// Current user's profile
#[utoipa::path(
    get,
    path = "/user/me",
    responses(
        (status = 200, description = "Profile of the caller", body = ProfileResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse),
        (status = 403, description = "User role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_user_profile(user: AuthenticatedUser) -> Json<ProfileResponse> {
    profile(user)
}

/// Current moderator's profile
#[utoipa::path(
    get,
    path = "/moderator/me",
    responses(
        (status = 200, description = "Profile of the caller", body = ProfileResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Moderator role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_moderator_profile(user: AuthenticatedUser) -> Json<ProfileResponse> {
    profile(user)
}
