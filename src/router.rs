use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate;
use crate::middleware::policy::authorize;
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::public::router::init_public_router;
use crate::modules::users::router::{init_moderator_router, init_user_router};
use crate::state::AppState;

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Builds the application. Layers run outermost first: logging, CORS,
/// authentication, then the access policy.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/auth", init_auth_router())
        .nest("/admin", init_admin_router())
        .nest("/user", init_user_router())
        .nest("/moderator", init_moderator_router())
        .nest("/public", init_public_router())
        .with_state(state.clone())
        .layer(middleware::from_fn(authorize))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
}
