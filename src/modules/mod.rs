//! Feature modules. Each has a `router.rs` that builds its routes, a
//! `controller.rs` with the handlers, and a `service.rs` when there is logic
//! beyond the handler.

pub mod admin;
pub mod auth;
pub mod public;
pub mod users;
