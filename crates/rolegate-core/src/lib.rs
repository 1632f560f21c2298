//! # Rolegate Core
//!
//! Foundational pieces shared by every Rolegate crate:
//!
//! - [`errors`]: [`AppError`], the HTTP-aware error returned by handlers and services
//! - [`password`]: bcrypt password hashing and verification

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password_with_cost, verify_password};
