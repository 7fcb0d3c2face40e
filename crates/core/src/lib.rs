//! Pure domain logic for the deployment command dashboard.
//!
//! Everything in this crate is synchronous and I/O-free: the deployment
//! view-model served to the browser, the status derivation rules, field
//! extraction from structured outputs or raw log text, timeline synthesis,
//! and the static fixtures (demo deployments, per-deployment metrics).

pub mod demo;
pub mod deployment;
pub mod extract;
pub mod metrics;
pub mod timeline;
