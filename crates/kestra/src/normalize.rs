//! Execution-record normalization.
//!
//! Turns raw engine executions into fully-populated [`Deployment`]
//! records: filter to the watched flow, extract AI-decision fields
//! (structured outputs first, log text as fallback), derive the UI
//! status, and synthesize the event timeline. Pure: the only clock is
//! the `now` parameter, so a fixed input yields a fixed output.

use chrono::{DateTime, SecondsFormat, Utc};

use commander_core::deployment::{
    self, action_taken, default_summary, derive_status, outcome, AiDecision, Deployment,
    DeploymentMetrics,
};
use commander_core::extract::ExtractedFields;
use commander_core::timeline;

use crate::executions::{Execution, LogEntry};

/// Informational log text and the fields scanned out of it, for one
/// execution.
#[derive(Debug, Clone, Default)]
pub struct ExecutionLogs {
    /// Concatenated informational messages, in received order.
    pub text: String,
    /// Fields recovered by pattern-scanning those messages.
    pub fields: ExtractedFields,
}

/// Filter log entries to informational severity and scan them.
///
/// Non-informational entries contribute neither text nor fields.
pub fn collect_logs(entries: &[LogEntry]) -> ExecutionLogs {
    let messages: Vec<&str> = entries
        .iter()
        .filter(|e| {
            e.level
                .as_deref()
                .is_some_and(|level| level.eq_ignore_ascii_case("INFO"))
        })
        .filter_map(|e| e.message.as_deref())
        .collect();

    ExecutionLogs {
        fields: ExtractedFields::from_log_lines(messages.iter().copied()),
        text: messages.join("\n"),
    }
}

/// Normalize a batch of executions without per-execution logs.
///
/// Keeps only executions of the watched namespace/flow pair, preserving
/// the order of the upstream listing. Executions failing the filter are
/// dropped entirely.
pub fn normalize_at(
    now: DateTime<Utc>,
    executions: &[Execution],
    namespace: &str,
    flow_id: &str,
) -> Vec<Deployment> {
    executions
        .iter()
        .filter(|e| e.matches_flow(namespace, flow_id))
        .map(|e| normalize_execution(now, e, None))
        .collect()
}

/// Normalize one execution into a deployment record.
///
/// The input is read-only; every optional field is resolved to its
/// default exactly once, here.
pub fn normalize_execution(
    now: DateTime<Utc>,
    execution: &Execution,
    logs: Option<ExecutionLogs>,
) -> Deployment {
    let now_str = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    let input = |key: &str| {
        execution
            .inputs
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    };

    let structured = execution
        .outputs
        .as_ref()
        .map(ExtractedFields::from_outputs)
        .unwrap_or_default();
    let (logs_text, log_fields) = match logs {
        Some(logs) => (Some(logs.text), logs.fields),
        None => (None, ExtractedFields::default()),
    };
    let fields = structured.or(log_fields);

    let decision = fields
        .ai_decision
        .as_deref()
        .and_then(AiDecision::parse)
        .unwrap_or_default();

    let state = execution.state.as_ref();
    let current = state.and_then(|s| s.current.as_deref());
    let start_date = state.and_then(|s| s.start_date.as_deref());
    let end_date = state.and_then(|s| s.end_date.as_deref());
    let first_history_date = state
        .and_then(|s| s.histories.as_ref())
        .and_then(|h| h.first())
        .and_then(|h| h.date.as_deref());

    let service = input("service")
        .unwrap_or(deployment::DEFAULT_SERVICE)
        .to_string();

    Deployment {
        id: execution.id.clone(),
        deployment_id: input("deploymentId").unwrap_or(&execution.id).to_string(),
        version: input("version")
            .unwrap_or(deployment::DEFAULT_VERSION)
            .to_string(),
        environment: input("environment")
            .unwrap_or(deployment::DEFAULT_ENVIRONMENT)
            .to_string(),
        timestamp: start_date.unwrap_or(&now_str).to_string(),
        status: derive_status(current, decision),
        ai_summary: fields
            .ai_summary
            .unwrap_or_else(|| default_summary(&service)),
        ai_decision: decision,
        ai_confidence: fields
            .ai_confidence
            .unwrap_or(deployment::DEFAULT_CONFIDENCE),
        ai_reasoning: fields
            .ai_reasoning
            .unwrap_or_else(|| deployment::DEFAULT_REASONING.to_string()),
        action_taken: action_taken(decision).to_string(),
        outcome: outcome(current, decision).to_string(),
        health_score: fields
            .health_score
            .unwrap_or(deployment::DEFAULT_HEALTH_SCORE),
        metrics: DeploymentMetrics {
            error_rate: fields
                .error_rate
                .unwrap_or_else(|| deployment::DEFAULT_PERCENT_METRIC.to_string()),
            memory_usage: fields
                .memory_usage
                .unwrap_or_else(|| deployment::DEFAULT_PERCENT_METRIC.to_string()),
            response_time: fields
                .response_time
                .unwrap_or_else(|| deployment::DEFAULT_MILLIS_METRIC.to_string()),
        },
        logs: logs_text,
        timeline: timeline::synthesize(
            now,
            current,
            start_date,
            end_date,
            first_history_date,
            input("description"),
            decision,
        ),
        service,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
