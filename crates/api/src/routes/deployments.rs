//! Route definitions for the deployment listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::deployments;
use crate::state::AppState;

/// ```text
/// GET  /deployments   -> list_deployments
/// POST /deployments   -> update_deployment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/deployments",
        get(deployments::list_deployments).post(deployments::update_deployment),
    )
}
