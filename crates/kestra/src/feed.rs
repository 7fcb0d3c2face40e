//! Deployment feed: one fetch cycle against the engine.
//!
//! [`DeploymentFeed`] owns the watched namespace/flow pair and turns one
//! listing call (plus the optional per-execution log fan-out) into the
//! normalized deployment sequence. Upstream failure never escapes a
//! cycle: the feed degrades to an empty list, or to the fixed demo set
//! when configured.

use chrono::Utc;
use futures::future::join_all;

use commander_core::demo::demo_deployments;
use commander_core::deployment::Deployment;

use crate::api::KestraApi;
use crate::executions::Execution;
use crate::normalize::{collect_logs, normalize_execution, ExecutionLogs};

/// What the feed watches and how it degrades.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Namespace the watched flow lives in.
    pub namespace: String,
    /// Flow identifier within the namespace.
    pub flow_id: String,
    /// Page size for the listing call.
    pub page_size: u32,
    /// Whether to fetch per-execution logs and scan them for fields the
    /// structured outputs do not carry.
    pub fetch_logs: bool,
    /// Serve the fixed demo set instead of an empty list when the engine
    /// is unreachable.
    pub demo_fallback: bool,
}

/// One engine plus one watched flow.
pub struct DeploymentFeed {
    api: KestraApi,
    config: FeedConfig,
}

impl DeploymentFeed {
    pub fn new(api: KestraApi, config: FeedConfig) -> Self {
        Self { api, config }
    }

    /// The underlying API client.
    pub fn api(&self) -> &KestraApi {
        &self.api
    }

    /// Run one full fetch cycle: list, filter, optionally fetch logs,
    /// normalize.
    ///
    /// Never fails: a transport error or error response from the listing
    /// call degrades to [`Self::fallback`], and a failing per-execution
    /// log fetch degrades only that record to defaults.
    pub async fn fetch_and_normalize(&self) -> Vec<Deployment> {
        let list = match self
            .api
            .list_executions(&self.config.namespace, &self.config.flow_id, self.config.page_size)
            .await
        {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "Execution listing failed, serving fallback");
                return self.fallback();
            }
        };

        let executions = list.results.unwrap_or_default();
        let now = Utc::now();

        let watched: Vec<&Execution> = executions
            .iter()
            .filter(|e| e.matches_flow(&self.config.namespace, &self.config.flow_id))
            .collect();

        let logs = if self.config.fetch_logs {
            self.fetch_logs(&watched).await
        } else {
            vec![None; watched.len()]
        };

        watched
            .into_iter()
            .zip(logs)
            .map(|(execution, logs)| normalize_execution(now, execution, logs))
            .collect()
    }

    /// Fan out the per-execution log fetches concurrently and wait for
    /// all of them to settle. Results line up with the input by index; a
    /// failed fetch yields `None` so its execution falls back to
    /// defaults without affecting the others.
    async fn fetch_logs(&self, executions: &[&Execution]) -> Vec<Option<ExecutionLogs>> {
        let fetches = executions.iter().map(|execution| async {
            match self.api.execution_logs(&execution.id).await {
                Ok(entries) => Some(collect_logs(&entries)),
                Err(e) => {
                    tracing::warn!(
                        execution_id = %execution.id,
                        error = %e,
                        "Log fetch failed, proceeding with defaults",
                    );
                    None
                }
            }
        });

        join_all(fetches).await
    }

    /// What a failed cycle serves: the demo set when enabled, otherwise
    /// an empty list.
    fn fallback(&self) -> Vec<Deployment> {
        if self.config.demo_fallback {
            demo_deployments()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Port 9 (discard) is never an HTTP listener; connections fail fast.
    fn unreachable_feed(demo_fallback: bool) -> DeploymentFeed {
        DeploymentFeed::new(
            KestraApi::new("http://127.0.0.1:9/api/v1".to_string(), None),
            FeedConfig {
                namespace: "ai.devops.commander".to_string(),
                flow_id: "ai-devops-workflow".to_string(),
                page_size: 20,
                fetch_logs: false,
                demo_fallback,
            },
        )
    }

    #[tokio::test]
    async fn unreachable_engine_yields_empty_list() {
        let deployments = unreachable_feed(false).fetch_and_normalize().await;
        assert!(deployments.is_empty());
    }

    #[tokio::test]
    async fn unreachable_engine_yields_demo_set_when_enabled() {
        let deployments = unreachable_feed(true).fetch_and_normalize().await;
        assert_eq!(deployments.len(), 3);
    }
}
