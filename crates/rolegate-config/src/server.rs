use std::env;
use std::net::SocketAddr;

use crate::env_parse_or;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse_or("APP_PORT", 8080),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string()),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Work factors bcrypt accepts.
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Clone, Debug)]
pub struct PasswordConfig {
    /// bcrypt work factor, 4..=31.
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 12 }
    }
}

impl PasswordConfig {
    /// Reads `BCRYPT_COST`, clamped into the range bcrypt accepts.
    pub fn from_env() -> Self {
        Self::with_cost(env_parse_or("BCRYPT_COST", 12))
    }

    pub fn with_cost(cost: u32) -> Self {
        Self {
            bcrypt_cost: cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
        }
    }
}
