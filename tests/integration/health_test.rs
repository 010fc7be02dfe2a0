//! Tests for the health endpoints.

use http::StatusCode;

use crate::helpers::{CountingDrive, TestApp};

#[tokio::test]
async fn test_health_reports_version() {
    let app = TestApp::new(CountingDrive::returning(vec![]));

    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].as_str().is_some());
}

#[tokio::test]
async fn test_detailed_health_with_connected_store() {
    let app = TestApp::new(CountingDrive::returning(vec![]));

    let response = app.request("GET", "/api/health/detailed").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "connected");
}

#[tokio::test]
async fn test_detailed_health_with_uninitialized_store() {
    let app = TestApp::uninitialized();

    let response = app.request("GET", "/api/health/detailed").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["store"], "uninitialized");
}
