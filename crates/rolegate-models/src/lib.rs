//! # Rolegate Models
//!
//! Domain models and DTOs shared by the directory, the services, and the
//! HTTP layer.
//!
//! - [`roles`]: roles and role-name canonicalisation
//! - [`users`]: users, account status, and admin DTOs
//! - [`auth`]: registration, login, and profile DTOs

pub mod auth;
pub mod roles;
pub mod users;

pub use auth::{AuthResponse, LoginRequest, MessageResponse, ProfileResponse, RegistrationRequest};
pub use roles::{
    ADMIN_ROLE, DEFAULT_ROLE, MODERATOR_ROLE, ROLE_PREFIX, Role, RoleRequest,
    canonical_role_name, display_role_name, requires_approval,
};
pub use users::{
    NewUser, ParseUserStatusError, User, UserAccount, UserStatus, UserStatusRequest,
};
