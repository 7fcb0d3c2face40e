//! Shared response envelope types for API handlers.
//!
//! The deployments listing is served as a bare JSON array (the dashboard
//! consumes it directly); the write-style endpoints answer with small
//! `success`-flagged envelopes. Use these instead of ad-hoc
//! `serde_json::json!` so the shapes stay consistent.

use serde::Serialize;

/// Acknowledgement for `POST /api/deployments`.
///
/// There is no persistence behind this endpoint; the submitted body is
/// echoed back under `data`.
#[derive(Debug, Serialize)]
pub struct UpdateAck {
    pub success: bool,
    pub message: &'static str,
    pub data: serde_json::Value,
}

/// Result of `POST /api/trigger`.
#[derive(Debug, Serialize)]
pub struct TriggerAck {
    pub success: bool,
    /// Upstream execution id, present on success.
    #[serde(rename = "executionId", skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TriggerAck {
    /// Successful trigger.
    pub fn triggered(execution_id: String, message: String) -> Self {
        Self {
            success: true,
            execution_id: Some(execution_id),
            message: Some(message),
            error: None,
        }
    }

    /// Failed trigger with a human-readable reason.
    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            execution_id: None,
            message: None,
            error: Some(error),
        }
    }
}
