//! AI-decision field extraction.
//!
//! Two sources feed the same [`ExtractedFields`] record, in priority
//! order: the execution's structured `outputs` map, then a textual scan
//! over informational log lines for executions whose outputs have not
//! landed yet. Both are total: a field that cannot be read from either
//! source stays `None` and defaults at view-model construction.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Output keys
// ---------------------------------------------------------------------------

pub const KEY_AI_DECISION: &str = "ai_decision";
pub const KEY_AI_CONFIDENCE: &str = "ai_confidence";
pub const KEY_AI_SUMMARY: &str = "ai_summary";
pub const KEY_AI_REASONING: &str = "ai_reasoning";
pub const KEY_HEALTH_SCORE: &str = "health_score";
pub const KEY_ERROR_RATE: &str = "error_rate";
pub const KEY_MEMORY_USAGE: &str = "memory_usage";
pub const KEY_RESPONSE_TIME: &str = "response_time";

// ---------------------------------------------------------------------------
// Log-line patterns
// ---------------------------------------------------------------------------
//
// Log lines embed key/value pairs as JSON fragments, either quoted
// (`"ai_decision": "ROLLBACK"`) or bare numbers (`"health_score": 80`).
// The metric patterns require their unit suffix so that unrelated JSON
// blobs sharing a key name do not match.

static AI_DECISION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""ai_decision"\s*:\s*"([^"]+)""#).expect("valid regex"));
static AI_CONFIDENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""ai_confidence"\s*:\s*"?([0-9]+(?:\.[0-9]+)?)"?"#).expect("valid regex")
});
static AI_SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""ai_summary"\s*:\s*"([^"]+)""#).expect("valid regex"));
static AI_REASONING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""ai_reasoning"\s*:\s*"([^"]+)""#).expect("valid regex"));
static HEALTH_SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""health_score"\s*:\s*"?([0-9]+)"?"#).expect("valid regex"));
static ERROR_RATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""error_rate"\s*:\s*"?([0-9]+(?:\.[0-9]+)?%)"?"#).expect("valid regex")
});
static MEMORY_USAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""memory_usage"\s*:\s*"?([0-9]+(?:\.[0-9]+)?%)"?"#).expect("valid regex")
});
static RESPONSE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""response_time"\s*:\s*"?([0-9]+(?:\.[0-9]+)?ms)"?"#).expect("valid regex")
});

// ---------------------------------------------------------------------------
// Extracted fields
// ---------------------------------------------------------------------------

/// AI-decision fields recovered from one extraction source. `None` means
/// the source did not carry the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub ai_decision: Option<String>,
    pub ai_confidence: Option<f64>,
    pub ai_summary: Option<String>,
    pub ai_reasoning: Option<String>,
    pub health_score: Option<i64>,
    pub error_rate: Option<String>,
    pub memory_usage: Option<String>,
    pub response_time: Option<String>,
}

impl ExtractedFields {
    /// Read fields from the execution's structured `outputs` map.
    ///
    /// Numeric fields that fail to parse are treated as absent so the
    /// usual default applies.
    pub fn from_outputs(outputs: &HashMap<String, String>) -> Self {
        Self {
            ai_decision: outputs.get(KEY_AI_DECISION).cloned(),
            ai_confidence: outputs.get(KEY_AI_CONFIDENCE).and_then(|v| v.parse().ok()),
            ai_summary: outputs.get(KEY_AI_SUMMARY).cloned(),
            ai_reasoning: outputs.get(KEY_AI_REASONING).cloned(),
            health_score: outputs.get(KEY_HEALTH_SCORE).and_then(|v| v.parse().ok()),
            error_rate: outputs.get(KEY_ERROR_RATE).cloned(),
            memory_usage: outputs.get(KEY_MEMORY_USAGE).cloned(),
            response_time: outputs.get(KEY_RESPONSE_TIME).cloned(),
        }
    }

    /// Scan log lines for embedded key/value pairs.
    ///
    /// A simple forward pass with overwrite-on-match: when the same key
    /// appears on several lines, the last matching line wins. Lines
    /// containing the substring `state` are excluded from the health-score
    /// match because the engine's state-transition blobs carry a
    /// `health_score` key of their own.
    pub fn from_log_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut fields = Self::default();

        for line in lines {
            if let Some(c) = AI_DECISION_RE.captures(line) {
                fields.ai_decision = Some(c[1].to_string());
            }
            if let Some(c) = AI_CONFIDENCE_RE.captures(line) {
                fields.ai_confidence = c[1].parse().ok().or(fields.ai_confidence);
            }
            if let Some(c) = AI_SUMMARY_RE.captures(line) {
                fields.ai_summary = Some(c[1].to_string());
            }
            if let Some(c) = AI_REASONING_RE.captures(line) {
                fields.ai_reasoning = Some(c[1].to_string());
            }
            if !line.contains("state") {
                if let Some(c) = HEALTH_SCORE_RE.captures(line) {
                    fields.health_score = c[1].parse().ok().or(fields.health_score);
                }
            }
            if let Some(c) = ERROR_RATE_RE.captures(line) {
                fields.error_rate = Some(c[1].to_string());
            }
            if let Some(c) = MEMORY_USAGE_RE.captures(line) {
                fields.memory_usage = Some(c[1].to_string());
            }
            if let Some(c) = RESPONSE_TIME_RE.captures(line) {
                fields.response_time = Some(c[1].to_string());
            }
        }

        fields
    }

    /// Merge two extraction sources, preferring `self` field-wise.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            ai_decision: self.ai_decision.or(fallback.ai_decision),
            ai_confidence: self.ai_confidence.or(fallback.ai_confidence),
            ai_summary: self.ai_summary.or(fallback.ai_summary),
            ai_reasoning: self.ai_reasoning.or(fallback.ai_reasoning),
            health_score: self.health_score.or(fallback.health_score),
            error_rate: self.error_rate.or(fallback.error_rate),
            memory_usage: self.memory_usage.or(fallback.memory_usage),
            response_time: self.response_time.or(fallback.response_time),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // -- structured outputs --

    #[test]
    fn outputs_read_directly() {
        let fields = ExtractedFields::from_outputs(&outputs(&[
            ("ai_decision", "ROLLBACK"),
            ("ai_confidence", "0.92"),
            ("ai_summary", "Error rate spiked after deploy"),
            ("health_score", "34"),
            ("error_rate", "8.5%"),
        ]));

        assert_eq!(fields.ai_decision.as_deref(), Some("ROLLBACK"));
        assert_eq!(fields.ai_confidence, Some(0.92));
        assert_eq!(fields.health_score, Some(34));
        assert_eq!(fields.error_rate.as_deref(), Some("8.5%"));
        assert_eq!(fields.memory_usage, None);
    }

    #[test]
    fn unparseable_numbers_are_absent() {
        let fields = ExtractedFields::from_outputs(&outputs(&[
            ("ai_confidence", "very sure"),
            ("health_score", "n/a"),
        ]));

        assert_eq!(fields.ai_confidence, None);
        assert_eq!(fields.health_score, None);
    }

    // -- log-line scanning --

    #[test]
    fn last_matching_line_wins() {
        let fields = ExtractedFields::from_log_lines([
            r#"INFO: {"ai_decision": "ROLLBACK"}"#,
            r#"INFO: {"ai_decision": "CONTINUE"}"#,
        ]);

        assert_eq!(fields.ai_decision.as_deref(), Some("CONTINUE"));
    }

    #[test]
    fn quoted_and_bare_numbers_both_match() {
        let quoted = ExtractedFields::from_log_lines([r#"result: {"ai_confidence": "0.88"}"#]);
        let bare = ExtractedFields::from_log_lines([r#"result: {"ai_confidence": 0.88}"#]);

        assert_eq!(quoted.ai_confidence, Some(0.88));
        assert_eq!(bare.ai_confidence, Some(0.88));
    }

    #[test]
    fn metric_values_require_unit_suffix() {
        let fields = ExtractedFields::from_log_lines([
            r#"metrics: {"error_rate": 3, "response_time": "120"}"#,
            r#"metrics: {"error_rate": "2.5%", "response_time": "150ms"}"#,
        ]);

        // The suffix-less first line never matches.
        assert_eq!(fields.error_rate.as_deref(), Some("2.5%"));
        assert_eq!(fields.response_time.as_deref(), Some("150ms"));
    }

    #[test]
    fn health_score_skips_state_blobs() {
        let fields = ExtractedFields::from_log_lines([
            r#"execution state changed: {"state": "RUNNING", "health_score": 99}"#,
            r#"analysis: {"health_score": 42}"#,
        ]);

        assert_eq!(fields.health_score, Some(42));
    }

    #[test]
    fn health_score_only_in_state_blob_is_absent() {
        let fields = ExtractedFields::from_log_lines([
            r#"execution state changed: {"state": "RUNNING", "health_score": 99}"#,
        ]);

        assert_eq!(fields.health_score, None);
    }

    #[test]
    fn memory_usage_scans_with_percent() {
        let fields =
            ExtractedFields::from_log_lines([r#"INFO {"memory_usage": "87%", "ai_reasoning": "Memory climbing steadily"}"#]);

        assert_eq!(fields.memory_usage.as_deref(), Some("87%"));
        assert_eq!(
            fields.ai_reasoning.as_deref(),
            Some("Memory climbing steadily")
        );
    }

    #[test]
    fn empty_input_extracts_nothing() {
        assert_eq!(
            ExtractedFields::from_log_lines(std::iter::empty::<&str>()),
            ExtractedFields::default()
        );
    }

    // -- merge priority --

    #[test]
    fn merge_prefers_structured_source() {
        let structured = ExtractedFields {
            ai_decision: Some("CONTINUE".to_string()),
            ..Default::default()
        };
        let textual = ExtractedFields {
            ai_decision: Some("ROLLBACK".to_string()),
            health_score: Some(70),
            ..Default::default()
        };

        let merged = structured.or(textual);
        assert_eq!(merged.ai_decision.as_deref(), Some("CONTINUE"));
        assert_eq!(merged.health_score, Some(70));
    }
}
