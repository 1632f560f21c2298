use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use rolegate_core::AppError;
use rolegate_models::{AuthResponse, LoginRequest, MessageResponse, RegistrationRequest};
use tracing::instrument;
use utoipa::ToSchema;

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new account
///
/// Requesting `admin` or `moderator` leaves the account pending until an
/// admin activates it.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Validation error, duplicate email, or unknown role", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegistrationRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let message =
        AuthService::register(state.directory.as_ref(), &state.password_config, dto).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new(message))))
}

/// Log in and receive a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login(
        state.directory.as_ref(),
        &state.tokens,
        &state.password_config,
        dto,
    )
    .await?;
    Ok(Json(response))
}
