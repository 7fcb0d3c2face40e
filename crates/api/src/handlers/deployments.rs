//! Handlers for the deployment listing consumed by the dashboard.

use axum::extract::State;
use axum::Json;

use commander_core::deployment::Deployment;

use crate::response::UpdateAck;
use crate::state::AppState;

/// GET /api/deployments
///
/// Runs one fetch cycle against the engine and returns the normalized
/// deployment records. The feed absorbs upstream failures, so this
/// always answers 200 with an array -- possibly empty -- and the
/// dashboard never renders a broken screen.
pub async fn list_deployments(State(state): State<AppState>) -> Json<Vec<Deployment>> {
    let deployments = state.feed.fetch_and_normalize().await;
    tracing::debug!(count = deployments.len(), "Serving deployment list");
    Json(deployments)
}

/// POST /api/deployments
///
/// Acknowledges a deployment status update. Nothing is persisted; the
/// body is echoed back so callers can confirm what was received.
pub async fn update_deployment(Json(body): Json<serde_json::Value>) -> Json<UpdateAck> {
    tracing::info!(update = %body, "Deployment update received");

    Json(UpdateAck {
        success: true,
        message: "Deployment status updated",
        data: body,
    })
}
