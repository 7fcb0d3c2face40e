//! REST API client for the workflow engine's HTTP endpoints.
//!
//! Wraps the engine's executions API (listing, per-execution logs,
//! execution triggering) using [`reqwest`]. Credentials are optional;
//! when present they are sent as HTTP Basic on every request.

use reqwest::multipart;

use crate::executions::{ExecutionList, LogEntry, TriggeredExecution};

/// HTTP client for one workflow engine instance.
pub struct KestraApi {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

/// Errors from the engine's REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum KestraApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The engine returned a non-2xx status code.
    #[error("Kestra API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl KestraApiError {
    /// Whether the failure was transport-level (engine unreachable)
    /// rather than an HTTP error response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// HTTP status of the error response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

impl KestraApi {
    /// Create a new API client.
    ///
    /// * `base_url`    - engine API root, e.g. `http://localhost:8080/api/v1`.
    /// * `credentials` - optional `(user, password)` pair for HTTP Basic.
    pub fn new(base_url: String, credentials: Option<(String, String)>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across components).
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        credentials: Option<(String, String)>,
    ) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Engine API root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List recent executions of one flow.
    ///
    /// Sends `GET /executions?namespace=...&flowId=...&size=N`. The
    /// engine pages newest-first; `size` caps the page.
    pub async fn list_executions(
        &self,
        namespace: &str,
        flow_id: &str,
        size: u32,
    ) -> Result<ExecutionList, KestraApiError> {
        let request = self
            .client
            .get(format!("{}/executions", self.base_url))
            .query(&[
                ("namespace", namespace),
                ("flowId", flow_id),
                ("size", &size.to_string()),
            ]);

        let response = self.authorized(request).send().await?;
        Self::parse_response(response).await
    }

    /// Fetch the log entries of one execution.
    ///
    /// Sends `GET /logs/{execution_id}`.
    pub async fn execution_logs(
        &self,
        execution_id: &str,
    ) -> Result<Vec<LogEntry>, KestraApiError> {
        let request = self
            .client
            .get(format!("{}/logs/{}", self.base_url, execution_id));

        let response = self.authorized(request).send().await?;
        Self::parse_response(response).await
    }

    /// Trigger a new execution of a flow.
    ///
    /// The engine expects execution inputs as multipart form data on
    /// `POST /executions/{namespace}/{flow_id}`.
    pub async fn trigger_execution(
        &self,
        namespace: &str,
        flow_id: &str,
        inputs: &[(String, String)],
    ) -> Result<TriggeredExecution, KestraApiError> {
        let mut form = multipart::Form::new();
        for (key, value) in inputs {
            form = form.text(key.clone(), value.clone());
        }

        let request = self
            .client
            .post(format!(
                "{}/executions/{}/{}",
                self.base_url, namespace, flow_id
            ))
            .multipart(form);

        let response = self.authorized(request).send().await?;
        Self::parse_response(response).await
    }

    /// Probe whether the engine answers HTTP at all.
    ///
    /// Any completed response, success or not, counts as reachable; only
    /// transport failures report `false`.
    pub async fn ping(&self) -> bool {
        self.client.get(self.base_url.as_str()).send().await.is_ok()
    }

    // ---- private helpers ----

    /// Attach HTTP Basic credentials when configured.
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some((user, password)) => request.basic_auth(user, Some(password)),
            None => request,
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`KestraApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, KestraApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(KestraApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, KestraApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
