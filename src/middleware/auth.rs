//! Bearer-token authentication.
//!
//! [`authenticate`] runs on every request. Requests without a bearer token
//! pass through anonymously and are left to the policy layer. A presented
//! token must verify, its subject must still exist, and the account must not
//! be pending; the account's current roles and status are then attached as
//! an [`AuthenticatedUser`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use rolegate_core::AppError;
use rolegate_models::UserStatus;
use tracing::{debug, warn};

use crate::state::AppState;

pub const PENDING_ACCOUNT_MESSAGE: &str = "Account is pending approval. Please contact admin.";

/// The principal attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub roles: Vec<String>,
    pub status: UserStatus,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required".to_string()))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

async fn resolve_principal(state: &AppState, token: &str) -> Result<AuthenticatedUser, AppError> {
    let claims = state.tokens.verify(token).map_err(|e| {
        warn!(reason = %e, "rejected bearer token");
        AppError::unauthorized(format!("Authentication failed: {}", e))
    })?;

    let account = state
        .directory
        .find_user_by_email(&claims.sub)
        .await?
        .ok_or_else(|| {
            warn!(subject = %claims.sub, "token subject no longer exists");
            AppError::unauthorized("Authentication failed: user not found".to_string())
        })?;

    let user = account.user;
    if user.status == UserStatus::Pending {
        warn!(email = %user.email, "pending account refused");
        return Err(AppError::forbidden(PENDING_ACCOUNT_MESSAGE.to_string()));
    }

    Ok(AuthenticatedUser {
        roles: user.role_names(),
        email: user.email,
        status: user.status,
    })
}

pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(token) = bearer_token(req.headers()).map(str::to_owned) else {
        return next.run(req).await;
    };

    match resolve_principal(&state, &token).await {
        Ok(user) => {
            debug!(email = %user.email, "request authenticated");
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}
