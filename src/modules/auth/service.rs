use rolegate_auth::TokenService;
use rolegate_config::PasswordConfig;
use rolegate_core::{AppError, hash_password_with_cost, verify_password};
use rolegate_db::{Directory, DirectoryError};
use rolegate_models::{
    AuthResponse, DEFAULT_ROLE, LoginRequest, NewUser, RegistrationRequest, Role, UserStatus,
    canonical_role_name, requires_approval,
};
use tracing::{info, instrument, warn};

pub const REGISTERED_ACTIVE_MESSAGE: &str =
    "Registration successful. You can now log in to your account.";
pub const REGISTERED_PENDING_MESSAGE: &str =
    "Registration successful. Your account is pending activation and requires admin review.";

fn duplicate_email(email: &str) -> AppError {
    AppError::bad_request(anyhow::anyhow!(
        "Already had an account with {} email",
        email
    ))
}

pub struct AuthService;

impl AuthService {
    /// Resolves requested role names to stored roles. An empty request means
    /// the default role. Privileged roles make the account pending.
    async fn resolve_roles(
        directory: &dyn Directory,
        requested: &[String],
    ) -> Result<(Vec<Role>, UserStatus), AppError> {
        let names: Vec<&str> = if requested.is_empty() {
            vec![DEFAULT_ROLE]
        } else {
            requested.iter().map(String::as_str).collect()
        };

        let mut roles = Vec::with_capacity(names.len());
        let mut status = UserStatus::Active;

        for name in names {
            let role = directory
                .find_role_by_name(&canonical_role_name(name))
                .await?
                .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("{} role not found", name)))?;

            if requires_approval(name) {
                status = UserStatus::Pending;
            }
            roles.push(role);
        }

        Ok((roles, status))
    }

    #[instrument(skip(directory, password_config, dto), fields(email = %dto.email))]
    pub async fn register(
        directory: &dyn Directory,
        password_config: &PasswordConfig,
        dto: RegistrationRequest,
    ) -> Result<&'static str, AppError> {
        if directory.find_user_by_email(&dto.email).await?.is_some() {
            return Err(duplicate_email(&dto.email));
        }

        let (roles, status) = Self::resolve_roles(directory, &dto.roles).await?;
        let password_hash = hash_password_with_cost(&dto.password, password_config.bcrypt_cost)?;

        let new_user = NewUser {
            full_name: dto.full_name,
            cell_number: dto.cell_number,
            email: dto.email,
            password_hash,
            status,
            roles,
        };

        let user = directory.create_user(new_user).await.map_err(|e| match e {
            DirectoryError::Duplicate(email) => duplicate_email(&email),
            other => AppError::from(other),
        })?;

        info!(user_id = %user.id, status = %user.status, "user registered");

        Ok(match user.status {
            UserStatus::Pending => REGISTERED_PENDING_MESSAGE,
            _ => REGISTERED_ACTIVE_MESSAGE,
        })
    }

    #[instrument(skip(directory, tokens, password_config, dto), fields(email = %dto.email))]
    pub async fn login(
        directory: &dyn Directory,
        tokens: &TokenService,
        password_config: &PasswordConfig,
        dto: LoginRequest,
    ) -> Result<AuthResponse, AppError> {
        let invalid = || AppError::unauthorized("Invalid credentials".to_string());

        let Some(account) = directory.find_user_by_email(&dto.email).await? else {
            // Unknown emails pay for one hash at the configured cost, like a password check.
            hash_password_with_cost(&dto.password, password_config.bcrypt_cost)?;
            warn!("login for unknown email");
            return Err(invalid());
        };

        if !verify_password(&dto.password, &account.password_hash)? {
            warn!("login with wrong password");
            return Err(invalid());
        }

        let token = tokens.issue(&account.user.email, &account.user.role_names())?;
        info!(user_id = %account.user.id, "user logged in");

        Ok(AuthResponse::bearer(token))
    }
}
