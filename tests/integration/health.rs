//! Health and plumbing endpoint integration tests
//!
//! - GET / - Plain-text banner
//! - GET /health - Status with provider info
//! - GET /health/live - Liveness probe
//! - GET /metrics, GET /openapi.json
//! - CORS headers

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::test_server;
use crate::mocks::MockOpenAI;

#[tokio::test]
async fn test_index_banner() {
    let mock = MockOpenAI::start().await;
    mock.expect_no_calls().await;
    let server = test_server(&mock);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Backend is running");
}

#[tokio::test]
async fn test_liveness_check() {
    let mock = MockOpenAI::start().await;
    let server = test_server(&mock);

    let response = server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_health_check_does_not_call_provider() {
    let mock = MockOpenAI::start().await;
    mock.expect_no_calls().await;
    let server = test_server(&mock);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["provider"], "openai");
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_metrics_endpoint_responds() {
    let mock = MockOpenAI::start().await;
    let server = test_server(&mock);

    server.get("/metrics").await.assert_status_ok();
}

#[tokio::test]
async fn test_openapi_document() {
    let mock = MockOpenAI::start().await;
    let server = test_server(&mock);

    let response = server.get("/openapi.json").await;

    response.assert_status_ok();
    let doc: Value = response.json();
    assert!(doc["paths"]["/complete"]["post"].is_object());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let mock = MockOpenAI::start().await;
    let server = test_server(&mock);

    let response = server
        .get("/")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:8081"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let mock = MockOpenAI::start().await;
    let server = test_server(&mock);

    server.get("/questions").await.assert_status(StatusCode::NOT_FOUND);
}
