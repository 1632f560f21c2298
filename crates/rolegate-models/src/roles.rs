//! Role models.
//!
//! Role names are stored in canonical form: the `ROLE_` prefix followed by
//! the upper-cased name, so `admin`, `Admin` and `ROLE_admin` all refer to
//! `ROLE_ADMIN`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const ROLE_PREFIX: &str = "ROLE_";

/// Assigned when a registration names no roles.
pub const DEFAULT_ROLE: &str = "ROLE_USER";
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";
pub const MODERATOR_ROLE: &str = "ROLE_MODERATOR";

pub fn canonical_role_name(name: &str) -> String {
    let upper = name.trim().to_uppercase();
    if upper.starts_with(ROLE_PREFIX) {
        upper
    } else {
        format!("{ROLE_PREFIX}{upper}")
    }
}

/// The canonical name without its prefix, as shown in admin messages.
pub fn display_role_name(name: &str) -> String {
    let canonical = canonical_role_name(name);
    canonical
        .strip_prefix(ROLE_PREFIX)
        .unwrap_or(&canonical)
        .to_string()
}

/// Privileged roles leave a fresh registration pending until an admin
/// activates it.
pub fn requires_approval(name: &str) -> bool {
    let canonical = canonical_role_name(name);
    canonical == ADMIN_ROLE || canonical == MODERATOR_ROLE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Role {
    #[serde(rename = "roleId")]
    pub id: Uuid,
    #[schema(example = "ROLE_ADMIN")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RoleRequest {
    #[validate(length(min = 1, max = 50, message = "Role name must be 1-50 characters"))]
    #[schema(example = "auditor")]
    pub role: String,
}
