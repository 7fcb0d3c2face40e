use std::sync::Arc;

use commander_kestra::DeploymentFeed;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream deployment feed (engine client + watched flow).
    pub feed: Arc<DeploymentFeed>,
}
