//! # Rolegate Auth
//!
//! Stateless bearer tokens for Rolegate.
//!
//! - [`claims`]: the JWT payload ([`Claims`])
//! - [`jwt`]: [`TokenService`], which issues and verifies HS256 tokens
//!
//! ```ignore
//! use rolegate_auth::TokenService;
//! use rolegate_config::JwtConfig;
//!
//! let tokens = TokenService::new(&JwtConfig::from_env());
//! let token = tokens.issue("ada@example.com", &["ROLE_USER".to_string()])?;
//! let claims = tokens.verify(&token)?;
//! assert_eq!(claims.sub, "ada@example.com");
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{TokenError, TokenService};
