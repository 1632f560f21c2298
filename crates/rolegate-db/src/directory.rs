use async_trait::async_trait;
use rolegate_models::{NewUser, Role, User, UserAccount, UserStatus};

use crate::error::DirectoryError;

/// Lookup and mutation of users and roles.
///
/// Role names passed in and returned are canonical (`ROLE_*`).
#[async_trait]
pub trait Directory: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserAccount>, DirectoryError>;

    /// Users with the given status, ordered by email.
    async fn find_users_by_status(&self, status: UserStatus) -> Result<Vec<User>, DirectoryError>;

    /// Inserts the user and its role links atomically.
    async fn create_user(&self, new_user: NewUser) -> Result<User, DirectoryError>;

    /// Returns `false` when no user has that email.
    async fn update_user_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<bool, DirectoryError>;

    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>, DirectoryError>;

    async fn create_role(&self, name: &str) -> Result<Role, DirectoryError>;

    /// All roles, ordered by name.
    async fn list_roles(&self) -> Result<Vec<Role>, DirectoryError>;
}
