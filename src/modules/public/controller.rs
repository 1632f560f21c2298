use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/public/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Public"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
