use std::env;

use crate::env_parse_or;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Fails only when `DATABASE_URL` is missing.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            url: env::var("DATABASE_URL")?,
            max_connections: env_parse_or("DATABASE_MAX_CONNECTIONS", 10),
        })
    }
}
