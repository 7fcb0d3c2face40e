//! Integration tests for the metrics detail endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: known deployment id serves the fixture record
// ---------------------------------------------------------------------------

#[tokio::test]
async fn known_deployment_returns_fixture_record() {
    let app = common::build_test_app(common::test_config());
    let response = get(app, "/api/metrics/deploy-001").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["deployment_id"], "deploy-001");
    assert_eq!(json["service"], "payment-service");
    assert_eq!(json["health_score"], 94);
    assert_eq!(json["metrics"]["response_time_ms"]["avg"], 118.0);
    assert!(json["samples"].is_array());
}

// ---------------------------------------------------------------------------
// Test: unknown deployment id returns a structured 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_deployment_returns_404() {
    let app = common::build_test_app(common::test_config());
    let response = get(app, "/api/metrics/deploy-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(
        json["error"].as_str().unwrap().contains("not found"),
        "error message should say the deployment was not found"
    );
}
