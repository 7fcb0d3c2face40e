//! Route definitions for scenario triggering.

use axum::routing::post;
use axum::Router;

use crate::handlers::trigger;
use crate::state::AppState;

/// ```text
/// POST /trigger -> trigger_deployment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/trigger", post(trigger::trigger_deployment))
}
