//! Liveness and readiness probes.

use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Plain-text liveness string at `GET /`. Always succeeds while the process
/// is running, independent of upstream API health.
pub async fn liveness() -> &'static str {
    "ideation-service is running"
}

/// Health check endpoint for Docker/K8s liveness probes. Reports process
/// health only; the upstream API is not consulted.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "ideation-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check endpoint for K8s readiness probes. Fails when the
/// provider is unconfigured or unreachable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.provider.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
