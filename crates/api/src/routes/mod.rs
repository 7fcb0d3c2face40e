pub mod deployments;
pub mod health;
pub mod metrics;
pub mod trigger;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /deployments               normalized deployment list
/// POST /deployments               acknowledge a status update (echo)
/// GET  /metrics/{deployment_id}   fixture metrics for one deployment
/// POST /trigger                   trigger a deployment scenario upstream
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(deployments::router())
        .merge(metrics::router())
        .merge(trigger::router())
}
