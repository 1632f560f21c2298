//! Application configuration.
//!
//! Each concern is loaded from the environment by its own struct in the
//! `rolegate-config` crate; [`AppConfig`] gathers them for startup.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | required |
//! | `DATABASE_MAX_CONNECTIONS` | `10` |
//! | `JWT_SECRET` | development placeholder |
//! | `JWT_ACCESS_EXPIRY` | `3600` |
//! | `BCRYPT_COST` | `12` |
//! | `ALLOWED_ORIGINS` | `http://localhost:5173` |
//! | `APP_HOST` / `APP_PORT` | `0.0.0.0` / `8080` |
//! | `LOG_DIR` | `storage/logs` |

use anyhow::Context;

pub use rolegate_config::{CorsConfig, DatabaseConfig, JwtConfig, PasswordConfig, ServerConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub server: ServerConfig,
    pub password: PasswordConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;

        Ok(Self {
            database,
            jwt: JwtConfig::from_env(),
            cors: CorsConfig::from_env(),
            server: ServerConfig::from_env(),
            password: PasswordConfig::from_env(),
        })
    }
}
