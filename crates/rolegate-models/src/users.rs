//! User models and account status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::roles::Role;

/// Account status. Only `Pending` is refused by the authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Pending => "pending",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUserStatusError(pub String);

impl fmt::Display for ParseUserStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown user status: {}", self.0)
    }
}

impl std::error::Error for ParseUserStatusError {}

impl FromStr for UserStatus {
    type Err = ParseUserStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "pending" => Ok(UserStatus::Pending),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(ParseUserStatusError(s.to_string())),
        }
    }
}

/// A user as exposed over the API. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userId")]
    pub id: Uuid,
    pub full_name: String,
    pub cell_number: String,
    pub email: String,
    pub status: UserStatus,
    pub roles: Vec<Role>,
}

impl User {
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.name.clone()).collect()
    }
}

/// A stored user together with its credentials.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user: User,
    pub password_hash: String,
}

/// Everything needed to insert a user and its role links.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub cell_number: String,
    pub email: String,
    pub password_hash: String,
    pub status: UserStatus,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserStatusRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "active")]
    pub status: String,
}
