//! Registration, login, and profile DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::UserStatus;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[serde(default)]
    #[validate(length(max = 20, message = "Cell number must be at most 20 characters"))]
    #[schema(example = "5551234")]
    pub cell_number: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "password123")]
    pub password: String,
    /// Requested role names, e.g. `user` or `admin`. Empty means `ROLE_USER`.
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type")]
    #[schema(example = "Bearer")]
    pub token_type: String,
}

impl AuthResponse {
    pub fn bearer(token: String) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The caller's identity as seen by the authentication layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub email: String,
    pub roles: Vec<String>,
    pub status: UserStatus,
}
