use std::fmt;
use std::sync::Arc;

use rolegate_auth::TokenService;
use rolegate_db::{Directory, PgDirectory, PgPool, init_db_pool};
use sqlx::migrate::Migrator;
use tracing::info;

use crate::config::{AppConfig, CorsConfig, JwtConfig, PasswordConfig};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn Directory>,
    pub tokens: TokenService,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub password_config: PasswordConfig,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("cors_config", &self.cors_config)
            .field("password_config", &self.password_config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        directory: Arc<dyn Directory>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        password_config: PasswordConfig,
    ) -> Self {
        Self {
            directory,
            tokens: TokenService::new(&jwt_config),
            jwt_config,
            cors_config,
            password_config,
        }
    }
}

/// Opens the pool and brings the schema up to date.
pub async fn connect_and_migrate(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = init_db_pool(&config.database).await?;
    MIGRATOR.run(&pool).await?;
    info!("database migrations applied");
    Ok(pool)
}

pub fn init_app_state(config: &AppConfig, pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(PgDirectory::new(pool)),
        config.jwt.clone(),
        config.cors.clone(),
        config.password.clone(),
    )
}
