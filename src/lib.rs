//! # Rolegate
//!
//! A role-based access control HTTP backend: registration, password login
//! that issues signed bearer tokens, per-request authentication that
//! re-reads account status, a route-prefix role policy, and admin endpoints
//! for roles and account status.
//!
//! ## Request pipeline
//!
//! ```text
//! logging -> CORS -> authenticate -> authorize -> handler
//! ```
//!
//! [`middleware::auth::authenticate`] turns a bearer token into an
//! [`middleware::auth::AuthenticatedUser`] (or rejects with 401/403), and
//! [`middleware::policy::authorize`] checks the caller against the route
//! table:
//!
//! | Prefix | Requirement |
//! |--------|-------------|
//! | `/public`, `/auth`, `/swagger-ui`, `/api-docs` | none |
//! | `/admin` | `ROLE_ADMIN` |
//! | `/moderator` | `ROLE_MODERATOR` |
//! | `/user` | `ROLE_USER` |
//! | anything else | any authenticated caller |
//!
//! ## Modules
//!
//! - [`cli`]: operator commands (`create-admin`)
//! - [`config`]: environment configuration
//! - [`docs`]: OpenAPI document
//! - [`logging`]: tracing setup and request logging
//! - [`middleware`]: authentication and access policy
//! - [`modules`]: feature modules (auth, admin, users, public)
//! - [`router`]: application router
//! - [`state`]: shared application state
//! - [`validator`]: validated JSON extractor

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use rolegate_auth;
pub use rolegate_config;
pub use rolegate_core;
pub use rolegate_db;
pub use rolegate_models;
