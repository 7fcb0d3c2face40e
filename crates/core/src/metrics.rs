//! Static per-deployment metrics fixture.
//!
//! The detailed metrics view is backed by a bundled fixture rather than
//! the workflow engine; lookups are by `deployment_id` and a miss is the
//! caller's 404. The fixture is embedded at compile time and parsed once.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Embedded fixture file.
const FIXTURE_JSON: &str = include_str!("../fixtures/metrics.json");

static FIXTURE: LazyLock<MetricsFixture> =
    LazyLock::new(|| serde_json::from_str(FIXTURE_JSON).expect("metrics fixture is valid JSON"));

/// Top-level fixture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsFixture {
    pub deployments: Vec<MetricsRecord>,
}

/// Aggregated metrics for one deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub deployment_id: String,
    pub service: String,
    pub version: String,
    pub health_score: i64,
    pub metrics: MetricsSummary,
    /// Short time-series the chart view renders.
    pub samples: Vec<MetricsSample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub error_rate_percent: f64,
    pub memory_usage_percent: f64,
    pub response_time_ms: ResponseTimes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTimes {
    pub avg: f64,
    pub p95: f64,
    pub p99: f64,
}

/// One point in a deployment's metric time-series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSample {
    pub offset_minutes: u32,
    pub error_rate_percent: f64,
    pub response_time_ms: f64,
    pub memory_usage_percent: f64,
}

/// Look up the fixture record for a deployment id.
pub fn lookup(deployment_id: &str) -> Option<&'static MetricsRecord> {
    FIXTURE
        .deployments
        .iter()
        .find(|d| d.deployment_id == deployment_id)
}
