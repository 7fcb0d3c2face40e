//! Handler for triggering a deployment scenario on the engine.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::response::TriggerAck;
use crate::state::AppState;

/// Request body for `POST /api/trigger`.
#[derive(Debug, Deserialize)]
pub struct TriggerRequest {
    /// `good`, `bad`, or `custom`.
    pub scenario: String,
    /// Execution inputs for the `custom` scenario.
    pub inputs: Option<HashMap<String, String>>,
}

/// POST /api/trigger
///
/// Builds the execution inputs for the named scenario and forwards them
/// to the engine's trigger endpoint. Upstream failures are reported in
/// the envelope, never as a bare 5xx body.
pub async fn trigger_deployment(
    State(state): State<AppState>,
    Json(request): Json<TriggerRequest>,
) -> (StatusCode, Json<TriggerAck>) {
    let inputs = scenario_inputs(
        &request.scenario,
        Utc::now().timestamp_millis(),
        request.inputs,
    );

    let kestra = &state.config.kestra;
    match state
        .feed
        .api()
        .trigger_execution(&kestra.namespace, &kestra.flow_id, &inputs)
        .await
    {
        Ok(execution) => {
            tracing::info!(
                execution_id = %execution.id,
                scenario = %request.scenario,
                "Deployment scenario triggered",
            );
            let message = format!(
                "Triggered {} deployment scenario",
                request.scenario.to_uppercase()
            );
            (
                StatusCode::OK,
                Json(TriggerAck::triggered(execution.id, message)),
            )
        }
        Err(e) if e.is_transport() => {
            tracing::warn!(error = %e, "Trigger failed: engine unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(TriggerAck::failed(
                    "Kestra is not reachable. Start the engine and retry.".to_string(),
                )),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Trigger rejected by engine");
            let status = e.status().unwrap_or(500);
            (
                StatusCode::BAD_GATEWAY,
                Json(TriggerAck::failed(format!(
                    "Kestra API returned {status}. Make sure the workflow is loaded."
                ))),
            )
        }
    }
}

/// Build the execution inputs for a named scenario.
///
/// `custom` passes the caller's inputs through untouched; `bad` and
/// `good` (the default for unknown names) stamp a fresh deployment id
/// with the current epoch milliseconds.
fn scenario_inputs(
    scenario: &str,
    now_millis: i64,
    custom: Option<HashMap<String, String>>,
) -> Vec<(String, String)> {
    if scenario == "custom" {
        if let Some(custom) = custom {
            let mut inputs: Vec<(String, String)> = custom.into_iter().collect();
            inputs.sort();
            return inputs;
        }
    }

    let (suffix, version, description) = if scenario == "bad" {
        (
            "bad",
            "v1.2.3-buggy",
            "Deployment with memory leak (SHOULD ROLLBACK)",
        )
    } else {
        (
            "good",
            "v1.2.4-stable",
            "Healthy deployment (SHOULD CONTINUE)",
        )
    };

    vec![
        (
            "deploymentId".to_string(),
            format!("deploy-{now_millis}-{suffix}"),
        ),
        ("service".to_string(), "payment-service".to_string()),
        ("environment".to_string(), "production".to_string()),
        ("version".to_string(), version.to_string()),
        ("description".to_string(), description.to_string()),
    ]
}
