//! Server and upstream-engine configuration.

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upstream workflow-engine settings.
    pub kestra: KestraConfig,
}

/// Connection and watch settings for the upstream workflow engine.
#[derive(Debug, Clone)]
pub struct KestraConfig {
    /// Engine API root, e.g. `http://localhost:8080/api/v1`.
    pub api_url: String,
    /// HTTP Basic user.
    pub user: String,
    /// HTTP Basic password.
    pub pass: String,
    /// Namespace of the watched flow.
    pub namespace: String,
    /// Flow identifier within the namespace.
    pub flow_id: String,
    /// Page size for the execution listing call.
    pub page_size: u32,
    /// Fetch per-execution logs and scan them for AI fields.
    pub fetch_logs: bool,
    /// Serve the fixed demo set instead of an empty list when the engine
    /// is unreachable.
    pub demo_fallback: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3000`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `KESTRA_API_URL`       | `http://localhost:8080/api/v1`   |
    /// | `KESTRA_USER`          | `admin@example.com`              |
    /// | `KESTRA_PASS`          | `Admin123!`                      |
    /// | `KESTRA_NAMESPACE`     | `ai.devops.commander`            |
    /// | `KESTRA_FLOW_ID`       | `ai-devops-workflow`             |
    /// | `EXECUTIONS_PAGE_SIZE` | `20`                             |
    /// | `FETCH_EXECUTION_LOGS` | `false`                          |
    /// | `DEMO_FALLBACK`        | `false`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            kestra: KestraConfig::from_env(),
        }
    }
}

impl KestraConfig {
    /// Load upstream-engine settings from environment variables with
    /// the literal local-development defaults.
    pub fn from_env() -> Self {
        let api_url = std::env::var("KESTRA_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api/v1".into());
        let user = std::env::var("KESTRA_USER").unwrap_or_else(|_| "admin@example.com".into());
        let pass = std::env::var("KESTRA_PASS").unwrap_or_else(|_| "Admin123!".into());
        let namespace =
            std::env::var("KESTRA_NAMESPACE").unwrap_or_else(|_| "ai.devops.commander".into());
        let flow_id =
            std::env::var("KESTRA_FLOW_ID").unwrap_or_else(|_| "ai-devops-workflow".into());

        let page_size: u32 = std::env::var("EXECUTIONS_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        Self {
            api_url,
            user,
            pass,
            namespace,
            flow_id,
            page_size,
            fetch_logs: env_flag("FETCH_EXECUTION_LOGS"),
            demo_fallback: env_flag("DEMO_FALLBACK"),
        }
    }
}

/// Read a boolean env var; `1` and any casing of `true` enable it.
fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
