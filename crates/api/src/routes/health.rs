use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the upstream workflow engine answers HTTP.
    pub upstream_reachable: bool,
}

/// GET /health -- returns service and upstream-engine health.
///
/// Always answers 200; an unreachable engine only degrades the status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let upstream_reachable = state.feed.api().ping().await;

    let status = if upstream_reachable { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        upstream_reachable,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
