use anyhow::anyhow;
use rolegate_core::AppError;
use rolegate_db::{Directory, DirectoryError};
use rolegate_models::{
    Role, RoleRequest, User, UserStatus, UserStatusRequest, canonical_role_name,
    display_role_name,
};
use tracing::{info, instrument};

fn parse_status(raw: &str) -> Result<UserStatus, AppError> {
    raw.parse::<UserStatus>().map_err(AppError::bad_request)
}

pub struct AdminService;

impl AdminService {
    #[instrument(skip(directory))]
    pub async fn add_role(directory: &dyn Directory, dto: RoleRequest) -> Result<String, AppError> {
        let display = display_role_name(&dto.role);
        if display.is_empty() {
            return Err(AppError::bad_request(anyhow!("Role name is required")));
        }

        let name = canonical_role_name(&dto.role);
        let already_exists = || AppError::bad_request(anyhow!("{} already exists", display));

        if directory.find_role_by_name(&name).await?.is_some() {
            return Err(already_exists());
        }

        directory.create_role(&name).await.map_err(|e| match e {
            DirectoryError::Duplicate(_) => already_exists(),
            other => AppError::from(other),
        })?;

        info!(role = %name, "role created");
        Ok(format!("{} role added", display))
    }

    #[instrument(skip(directory))]
    pub async fn update_user_status(
        directory: &dyn Directory,
        dto: UserStatusRequest,
    ) -> Result<String, AppError> {
        let status = parse_status(&dto.status)?;

        if !directory.update_user_status(&dto.email, status).await? {
            return Err(AppError::bad_request(anyhow!("User not found")));
        }

        info!(email = %dto.email, status = %status, "user status updated");
        Ok(format!("Updated user status to {}", status))
    }

    /// Fails with 400 rather than returning an empty list.
    #[instrument(skip(directory))]
    pub async fn users_by_status(
        directory: &dyn Directory,
        status: &str,
    ) -> Result<Vec<User>, AppError> {
        let status = parse_status(status)?;
        let users = directory.find_users_by_status(status).await?;

        if users.is_empty() {
            return Err(AppError::bad_request(anyhow!(
                "No users found with {} status",
                status
            )));
        }
        Ok(users)
    }

    pub async fn list_roles(directory: &dyn Directory) -> Result<Vec<Role>, AppError> {
        Ok(directory.list_roles().await?)
    }
}
