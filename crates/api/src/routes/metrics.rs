//! Route definitions for the metrics detail view.

use axum::routing::get;
use axum::Router;

use crate::handlers::metrics;
use crate::state::AppState;

/// ```text
/// GET /metrics/{deployment_id} -> get_metrics
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/metrics/{deployment_id}", get(metrics::get_metrics))
}
