//! Hard-coded demo deployments.
//!
//! Served instead of an empty list when the upstream engine is
//! unreachable and the demo fallback is enabled, so a disconnected
//! dashboard still has something to render. Three records, one per UI
//! status, with fixed timestamps so repeated fetches are identical.

use chrono::{DateTime, Utc};

use crate::deployment::{
    action_taken, derive_status, outcome, AiDecision, Deployment, DeploymentMetrics,
};
use crate::timeline;

/// Anchor time all demo records hang off.
const DEMO_ANCHOR: &str = "2024-06-01T09:00:00.000Z";

/// Build the fixed three-record demo set.
pub fn demo_deployments() -> Vec<Deployment> {
    let now: DateTime<Utc> = DEMO_ANCHOR
        .parse()
        .expect("demo anchor is valid RFC 3339");

    vec![
        demo_record(
            now,
            "demo-exec-001",
            "deploy-001-good",
            "payment-service",
            "v1.2.4-stable",
            Some("SUCCESS"),
            AiDecision::Continue,
            "All golden signals nominal after rollout.",
            "Error rate and latency held steady across the canary window.",
            0.97,
            94,
            ("0.4%", "46%", "118ms"),
            "2024-06-01T08:40:00.000Z",
            Some("2024-06-01T08:43:30.000Z"),
            "Healthy deployment (SHOULD CONTINUE)",
        ),
        demo_record(
            now,
            "demo-exec-002",
            "deploy-002-bad",
            "payment-service",
            "v1.2.3-buggy",
            Some("SUCCESS"),
            AiDecision::Rollback,
            "Memory usage climbed past the rollback threshold.",
            "Heap growth of 12%/min with no plateau indicates a leak in the new release.",
            0.91,
            31,
            ("8.2%", "91%", "640ms"),
            "2024-06-01T08:10:00.000Z",
            Some("2024-06-01T08:14:10.000Z"),
            "Deployment with memory leak (SHOULD ROLLBACK)",
        ),
        demo_record(
            now,
            "demo-exec-003",
            "deploy-003-canary",
            "inventory-service",
            "v2.1.0",
            Some("RUNNING"),
            AiDecision::Analyzing,
            "Analyzing inventory-service...",
            "AI analysis in progress...",
            0.85,
            50,
            ("0%", "0%", "0ms"),
            "2024-06-01T08:58:00.000Z",
            None,
            "Canary rollout of inventory-service",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn demo_record(
    now: DateTime<Utc>,
    id: &str,
    deployment_id: &str,
    service: &str,
    version: &str,
    state_current: Option<&str>,
    decision: AiDecision,
    summary: &str,
    reasoning: &str,
    confidence: f64,
    health_score: i64,
    (error_rate, memory_usage, response_time): (&str, &str, &str),
    start_date: &str,
    end_date: Option<&str>,
    description: &str,
) -> Deployment {
    Deployment {
        id: id.to_string(),
        deployment_id: deployment_id.to_string(),
        service: service.to_string(),
        version: version.to_string(),
        environment: "production".to_string(),
        timestamp: start_date.to_string(),
        status: derive_status(state_current, decision),
        ai_summary: summary.to_string(),
        ai_decision: decision,
        ai_confidence: confidence,
        ai_reasoning: reasoning.to_string(),
        action_taken: action_taken(decision).to_string(),
        outcome: outcome(state_current, decision).to_string(),
        health_score,
        metrics: DeploymentMetrics {
            error_rate: error_rate.to_string(),
            memory_usage: memory_usage.to_string(),
            response_time: response_time.to_string(),
        },
        logs: None,
        timeline: timeline::synthesize(
            now,
            state_current,
            Some(start_date),
            end_date,
            None,
            Some(description),
            decision,
        ),
    }
}
