use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rolegate_core::AppError;
use rolegate_models::{MessageResponse, Role, RoleRequest, User, UserStatusRequest};
use tracing::instrument;

use super::service::AdminService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a role
///
/// The name is stored as `ROLE_` followed by the upper-cased input.
#[utoipa::path(
    post,
    path = "/admin/addRole",
    request_body = RoleRequest,
    responses(
        (status = 201, description = "Role created", body = MessageResponse),
        (status = 400, description = "Role already exists", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn add_role(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RoleRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let message = AdminService::add_role(state.directory.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new(message))))
}

/// Change a user's account status
#[utoipa::path(
    post,
    path = "/admin/updateUserStatus",
    request_body = UserStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 400, description = "User not found or unknown status", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn update_user_status(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UserStatusRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = AdminService::update_user_status(state.directory.as_ref(), dto).await?;
    Ok(Json(MessageResponse::new(message)))
}

/// List users with a given status
#[utoipa::path(
    get,
    path = "/admin/users/{status}",
    params(
        ("status" = String, Path, description = "active, pending or inactive")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<User>),
        (status = 400, description = "No users with that status or unknown status", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_users_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = AdminService::users_by_status(state.directory.as_ref(), &status).await?;
    Ok(Json(users))
}

/// List all roles
#[utoipa::path(
    get,
    path = "/admin/roles",
    responses(
        (status = 200, description = "All roles", body = Vec<Role>),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_roles(State(state): State<AppState>) -> Result<Json<Vec<Role>>, AppError> {
    let roles = AdminService::list_roles(state.directory.as_ref()).await?;
    Ok(Json(roles))
}
