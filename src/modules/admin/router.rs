use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{add_role, get_roles, get_users_by_status, update_user_status};
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/addRole", post(add_role))
        .route("/updateUserStatus", post(update_user_status))
        .route("/users/{status}", get(get_users_by_status))
        .route("/roles", get(get_roles))
}
