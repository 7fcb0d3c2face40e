//! Timeline synthesis for the deployment detail view.
//!
//! The upstream engine does not expose a per-step event feed, so the
//! dashboard reconstructs an event timeline from the execution state
//! fields. Entries whose guard does not hold are omitted, never inserted
//! as placeholders.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::deployment::AiDecision;

/// Seconds between the AI decision completing and the follow-up action
/// being reported as executed.
const ACTION_DELAY_SECS: i64 = 120;

/// One synthesized timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// RFC 3339 timestamp of the event.
    pub time: String,
    pub event: String,
    pub description: String,
}

/// Build the ordered event timeline for one execution.
///
/// At most four entries are produced:
/// 1. Always: the deployment trigger, at `start_date` (or `now`).
/// 2. If the state history is non-empty: log collection, at the first
///    history timestamp.
/// 3. If the execution succeeded: the AI decision, at `end_date` (or `now`).
/// 4. If the execution succeeded: the executed action, 120 seconds after
///    `end_date`.
#[allow(clippy::too_many_arguments)]
pub fn synthesize(
    now: DateTime<Utc>,
    state_current: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
    first_history_date: Option<&str>,
    description: Option<&str>,
    decision: AiDecision,
) -> Vec<TimelineEvent> {
    let now_str = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let mut events = Vec::with_capacity(4);

    events.push(TimelineEvent {
        time: start_date.unwrap_or(&now_str).to_string(),
        event: "Deployment triggered".to_string(),
        description: description.unwrap_or("Deployment initiated").to_string(),
    });

    if let Some(date) = first_history_date {
        events.push(TimelineEvent {
            time: date.to_string(),
            event: "Logs collected and analyzed".to_string(),
            description: "AI analysis running".to_string(),
        });
    }

    if state_current == Some("SUCCESS") {
        events.push(TimelineEvent {
            time: end_date.unwrap_or(&now_str).to_string(),
            event: "AI decision completed".to_string(),
            description: format!("Result: {}", decision.as_str()),
        });

        events.push(TimelineEvent {
            time: offset_timestamp(end_date, now, ACTION_DELAY_SECS),
            event: "Action executed".to_string(),
            description: if decision == AiDecision::Rollback {
                "Rollback completed".to_string()
            } else {
                "Monitoring continues".to_string()
            },
        });
    }

    events
}

/// Shift an RFC 3339 timestamp forward by `secs`, falling back to `now`
/// when the timestamp is absent or unparseable.
fn offset_timestamp(timestamp: Option<&str>, now: DateTime<Utc>, secs: i64) -> String {
    let base = timestamp
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(now);
    (base + Duration::seconds(secs)).to_rfc3339_opts(SecondsFormat::Millis, true)
}
