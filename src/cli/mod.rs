//! Operator commands run from the `rolegate` binary.

use anyhow::{Context, bail};
use rolegate_config::PasswordConfig;
use rolegate_core::hash_password_with_cost;
use rolegate_db::Directory;
use rolegate_models::{ADMIN_ROLE, NewUser, User, UserStatus};
use tracing::info;
use validator::ValidateEmail;

/// Creates an active account holding `ROLE_ADMIN`.
///
/// Registration through the API always leaves admins pending, so the first
/// admin has to come from here.
pub async fn create_admin(
    directory: &dyn Directory,
    password_config: &PasswordConfig,
    full_name: &str,
    email: &str,
    password: &str,
    cell_number: &str,
) -> anyhow::Result<User> {
    if !email.validate_email() {
        bail!("Invalid email format: {}", email);
    }

    if password.len() < 8 {
        bail!("Password must be at least 8 characters");
    }

    if directory.find_user_by_email(email).await?.is_some() {
        bail!("User with email {} already exists", email);
    }

    let role = match directory.find_role_by_name(ADMIN_ROLE).await? {
        Some(role) => role,
        None => directory.create_role(ADMIN_ROLE).await?,
    };

    let password_hash = hash_password_with_cost(password, password_config.bcrypt_cost)
        .map_err(|e| e.error)
        .context("Failed to hash password")?;

    let user = directory
        .create_user(NewUser {
            full_name: full_name.to_string(),
            cell_number: cell_number.to_string(),
            email: email.to_string(),
            password_hash,
            status: UserStatus::Active,
            roles: vec![role],
        })
        .await?;

    info!(user_id = %user.id, email = %user.email, "admin account created");
    Ok(user)
}
