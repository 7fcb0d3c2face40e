//! Deployment view-model and status derivation rules.
//!
//! A [`Deployment`] is the flat record the dashboard renders: one per
//! upstream workflow execution, fully populated (every field has a defined
//! default) before any presentation logic runs.

use serde::{Deserialize, Serialize};

use crate::timeline::TimelineEvent;

// ---------------------------------------------------------------------------
// Field defaults
// ---------------------------------------------------------------------------

/// Service name used when the execution inputs carry none.
pub const DEFAULT_SERVICE: &str = "unknown-service";
/// Version string used when the execution inputs carry none.
pub const DEFAULT_VERSION: &str = "1.0.0";
/// Environment used when the execution inputs carry none.
pub const DEFAULT_ENVIRONMENT: &str = "production";
/// AI reasoning placeholder shown while the analysis step has not reported.
pub const DEFAULT_REASONING: &str = "AI analysis in progress...";
/// Confidence assumed when the monitoring step has not reported one.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;
/// Health score assumed when the monitoring step has not reported one.
pub const DEFAULT_HEALTH_SCORE: i64 = 50;
/// Display default for percentage-unit metrics.
pub const DEFAULT_PERCENT_METRIC: &str = "0%";
/// Display default for millisecond-unit metrics.
pub const DEFAULT_MILLIS_METRIC: &str = "0ms";

/// AI summary placeholder, parameterized by the (already defaulted) service.
pub fn default_summary(service: &str) -> String {
    format!("Analyzing {service}...")
}

// ---------------------------------------------------------------------------
// AI decision
// ---------------------------------------------------------------------------

/// Categorical outcome reported by the monitoring step for an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiDecision {
    Continue,
    Rollback,
    Analyzing,
}

impl AiDecision {
    /// Parse an upstream decision string. Unknown values are treated as
    /// not-yet-decided rather than rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CONTINUE" => Some(Self::Continue),
            "ROLLBACK" => Some(Self::Rollback),
            "ANALYZING" => Some(Self::Analyzing),
            _ => None,
        }
    }

    /// Wire representation (`CONTINUE` / `ROLLBACK` / `ANALYZING`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "CONTINUE",
            Self::Rollback => "ROLLBACK",
            Self::Analyzing => "ANALYZING",
        }
    }
}

impl Default for AiDecision {
    fn default() -> Self {
        Self::Analyzing
    }
}

// ---------------------------------------------------------------------------
// Deployment status
// ---------------------------------------------------------------------------

/// UI status of a deployment, derived from the execution state and the
/// AI decision. Never read back from upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Healthy,
    Deploying,
    RolledBack,
}

/// Derive the UI status from `(state.current, ai_decision)`.
///
/// Precedence:
/// 1. `SUCCESS` -> rolled back if the AI decided `ROLLBACK`, healthy
///    otherwise.
/// 2. `FAILED` -> rolled back regardless of the decision.
/// 3. Any other (or missing) state is treated as in flight.
pub fn derive_status(state_current: Option<&str>, decision: AiDecision) -> DeploymentStatus {
    match state_current {
        Some("SUCCESS") => {
            if decision == AiDecision::Rollback {
                DeploymentStatus::RolledBack
            } else {
                DeploymentStatus::Healthy
            }
        }
        Some("FAILED") => DeploymentStatus::RolledBack,
        _ => DeploymentStatus::Deploying,
    }
}

// ---------------------------------------------------------------------------
// Derived display text
// ---------------------------------------------------------------------------

/// Action line shown in the "Action Taken" card.
pub fn action_taken(decision: AiDecision) -> &'static str {
    if decision == AiDecision::Rollback {
        "Automatic rollback initiated"
    } else {
        "Continue monitoring"
    }
}

/// Outcome line shown in the "Outcome" card.
pub fn outcome(state_current: Option<&str>, decision: AiDecision) -> &'static str {
    if state_current == Some("SUCCESS") {
        if decision == AiDecision::Rollback {
            "Service restored successfully"
        } else {
            "Deployment stable and healthy"
        }
    } else {
        "Processing..."
    }
}

// ---------------------------------------------------------------------------
// View-model records
// ---------------------------------------------------------------------------

/// Display metrics for a deployment, kept as strings with unit suffixes
/// exactly as the upstream monitoring step reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentMetrics {
    pub error_rate: String,
    pub memory_usage: String,
    pub response_time: String,
}

impl Default for DeploymentMetrics {
    fn default() -> Self {
        Self {
            error_rate: DEFAULT_PERCENT_METRIC.to_string(),
            memory_usage: DEFAULT_PERCENT_METRIC.to_string(),
            response_time: DEFAULT_MILLIS_METRIC.to_string(),
        }
    }
}

/// One fully-populated deployment record, serialized snake_case for the
/// dashboard. Recomputed wholesale on every fetch cycle; carries no state
/// across cycles beyond the upstream execution id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    /// Upstream execution id.
    pub id: String,
    /// Caller-supplied deployment id, falling back to the execution id.
    pub deployment_id: String,
    pub service: String,
    pub version: String,
    pub environment: String,
    /// Execution start time (RFC 3339), or the cycle time if unset.
    pub timestamp: String,
    pub status: DeploymentStatus,
    pub ai_summary: String,
    pub ai_decision: AiDecision,
    pub ai_confidence: f64,
    pub ai_reasoning: String,
    pub action_taken: String,
    pub outcome: String,
    pub health_score: i64,
    pub metrics: DeploymentMetrics,
    /// Concatenated informational log text, present only when the
    /// per-execution log fetch is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
    pub timeline: Vec<TimelineEvent>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
