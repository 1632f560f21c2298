use axum::{Router, routing::get};

use super::controller::{get_moderator_profile, get_user_profile};
use crate::state::AppState;

pub fn init_user_router() -> Router<AppState> {
    Router::new().route("/me", get(get_user_profile))
}

pub fn init_moderator_router() -> Router<AppState> {
    Router::new().route("/me", get(get_moderator_profile))
}
