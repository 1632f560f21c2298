//! Request security.
//!
//! - [`auth`]: resolves the bearer token into an [`auth::AuthenticatedUser`]
//! - [`policy`]: enforces the route-prefix role table
//!
//! Both are installed on the top-level router so they see full request paths.

pub mod auth;
pub mod policy;
