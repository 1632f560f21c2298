//! # Rolegate Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: allowed browser origins
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: listen address and password hashing cost
//!
//! Every loader falls back to a development default except `DATABASE_URL`.
//!
//! ```ignore
//! use rolegate_config::{JwtConfig, CorsConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::{PasswordConfig, ServerConfig};

/// Reads `key` and parses it, falling back to `default` when unset or unparsable.
pub(crate) fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
