//! Payload records returned by the engine's REST API.
//!
//! Field names mirror the engine's camelCase JSON. Every field the
//! engine may omit is an `Option`; defaulting happens once, in
//! [`crate::normalize`], never here.

use std::collections::HashMap;

use serde::Deserialize;

/// Response of `GET /executions?namespace=...&flowId=...`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionList {
    pub results: Option<Vec<Execution>>,
    pub total: Option<i64>,
}

/// One workflow execution record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub flow_id: String,
    /// Parameters the run was invoked with (`deploymentId`, `service`,
    /// `version`, `environment`, `description`).
    pub inputs: Option<HashMap<String, String>>,
    /// Machine-reported results (`ai_decision`, `ai_summary`, ...), all
    /// stringly-typed upstream.
    pub outputs: Option<HashMap<String, String>>,
    pub state: Option<ExecutionState>,
}

/// Execution state block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionState {
    pub current: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub histories: Option<Vec<StateHistory>>,
}

/// One state-transition history entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateHistory {
    pub date: Option<String>,
    pub state: Option<String>,
}

/// One entry of `GET /logs/{execution_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogEntry {
    pub level: Option<String>,
    pub message: Option<String>,
}

/// Response of the execution-trigger endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggeredExecution {
    pub id: String,
}

impl Execution {
    /// Whether this execution belongs to the watched namespace/flow pair.
    pub fn matches_flow(&self, namespace: &str, flow_id: &str) -> bool {
        self.namespace == namespace && self.flow_id == flow_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_decodes_from_engine_json() {
        let json = r#"{
            "id": "5FgqrsT2xkLnPZuQ",
            "namespace": "ai.devops.commander",
            "flowId": "ai-devops-workflow",
            "inputs": { "deploymentId": "deploy-17", "service": "payment-service" },
            "outputs": { "ai_decision": "CONTINUE" },
            "state": {
                "current": "SUCCESS",
                "startDate": "2024-03-01T11:58:00.000Z",
                "endDate": "2024-03-01T11:59:30.000Z",
                "histories": [
                    { "date": "2024-03-01T11:58:00.000Z", "state": "CREATED" },
                    { "date": "2024-03-01T11:58:05.000Z", "state": "RUNNING" }
                ]
            }
        }"#;

        let execution: Execution = serde_json::from_str(json).unwrap();
        assert_eq!(execution.id, "5FgqrsT2xkLnPZuQ");
        assert_eq!(execution.flow_id, "ai-devops-workflow");
        assert_eq!(
            execution.inputs.as_ref().unwrap().get("service").unwrap(),
            "payment-service"
        );

        let state = execution.state.unwrap();
        assert_eq!(state.current.as_deref(), Some("SUCCESS"));
        assert_eq!(state.histories.unwrap().len(), 2);
    }

    #[test]
    fn sparse_execution_decodes_with_nones() {
        let execution: Execution = serde_json::from_str(r#"{ "id": "x1" }"#).unwrap();
        assert_eq!(execution.id, "x1");
        assert!(execution.namespace.is_empty());
        assert!(execution.inputs.is_none());
        assert!(execution.outputs.is_none());
        assert!(execution.state.is_none());
    }

    #[test]
    fn matches_flow_requires_both_fields() {
        let execution = Execution {
            id: "x1".to_string(),
            namespace: "ai.devops.commander".to_string(),
            flow_id: "ai-devops-workflow".to_string(),
            ..Default::default()
        };

        assert!(execution.matches_flow("ai.devops.commander", "ai-devops-workflow"));
        assert!(!execution.matches_flow("ai.devops.commander", "other-flow"));
        assert!(!execution.matches_flow("other.namespace", "ai-devops-workflow"));
    }
}
