//! System health handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Liveness message
    #[schema(example = "alive")]
    pub message: String,
}

/// Health check endpoint
///
/// Reports that the process is serving. Never touches the database.
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "system",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
#[instrument]
pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "alive".to_string(),
    })
}
