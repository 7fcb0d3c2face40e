//! Handler for the per-deployment metrics detail view.

use axum::extract::Path;
use axum::Json;

use commander_core::metrics::{self, MetricsRecord};

use crate::error::{AppError, AppResult};

/// GET /api/metrics/{deployment_id}
///
/// Serves the bundled metrics fixture record for one deployment.
pub async fn get_metrics(Path(deployment_id): Path<String>) -> AppResult<Json<MetricsRecord>> {
    match metrics::lookup(&deployment_id) {
        Some(record) => Ok(Json(record.clone())),
        None => Err(AppError::NotFound {
            entity: "Deployment",
            id: deployment_id,
        }),
    }
}
