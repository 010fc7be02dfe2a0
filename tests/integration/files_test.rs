//! Tests for the /api/files listing endpoint.

use chrono::Utc;
use http::StatusCode;
use serde_json::json;

use drivehub_core::config::graph::GraphConfig;
use drivehub_graph::GraphClient;

use crate::helpers::{CountingDrive, TestApp, sample_files};

#[tokio::test]
async fn test_empty_store_fetches_from_graph_and_caches() {
    let drive = CountingDrive::returning(sample_files());
    let app = TestApp::new(drive.clone());

    let before = Utc::now().timestamp_millis();
    let response = app.request("GET", "/api/files").await;
    let after = Utc::now().timestamp_millis();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "files": [{
                "id": "1",
                "name": "a.txt",
                "lastModifiedDateTime": "2024-01-01T00:00:00Z",
                "size": 10
            }],
            "source": "graph-api"
        })
    );
    assert_eq!(drive.call_count(), 1);

    let record = app.stored_record().await.expect("record cached");
    assert_eq!(record.files, sample_files());
    assert!(record.expiry >= before + 3_600_000);
    assert!(record.expiry <= after + 3_600_000);
}

#[tokio::test]
async fn test_fresh_cache_is_served_without_upstream_call() {
    let drive = CountingDrive::returning(vec![]);
    let app = TestApp::new(drive.clone());

    let now = Utc::now().timestamp_millis();
    app.seed_record(sample_files(), now + 60_000).await;

    let response = app.request("GET", "/api/files").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["source"], "cache");
    assert_eq!(response.body["files"][0]["id"], "1");
    assert_eq!(drive.call_count(), 0);
}

#[tokio::test]
async fn test_repeated_calls_within_ttl_hit_cache_once_populated() {
    let drive = CountingDrive::returning(sample_files());
    let app = TestApp::new(drive.clone());

    let first = app.request("GET", "/api/files").await;
    let second = app.request("GET", "/api/files").await;
    let third = app.request("GET", "/api/files").await;

    assert_eq!(first.body["source"], "graph-api");
    assert_eq!(second.body["source"], "cache");
    assert_eq!(third.body["source"], "cache");
    assert_eq!(second.body["files"], first.body["files"]);
    assert_eq!(third.body["files"], first.body["files"]);
    assert_eq!(drive.call_count(), 1);
}

#[tokio::test]
async fn test_expired_record_is_refreshed_and_overwritten() {
    let drive = CountingDrive::returning(sample_files());
    let app = TestApp::new(drive.clone());

    let now = Utc::now().timestamp_millis();
    app.seed_record(vec![], now - 1).await;

    let response = app.request("GET", "/api/files").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["source"], "graph-api");
    assert_eq!(drive.call_count(), 1);

    let record = app.stored_record().await.expect("record overwritten");
    assert_eq!(record.files, sample_files());
    assert!(record.expiry > now);
}

#[tokio::test]
async fn test_listing_accepts_any_method() {
    let drive = CountingDrive::returning(sample_files());
    let app = TestApp::new(drive);

    for method in ["POST", "PUT", "DELETE", "PATCH"] {
        let response = app.request(method, "/api/files").await;
        assert_eq!(response.status, StatusCode::OK, "method {method}");
    }
}

#[tokio::test]
async fn test_missing_graph_credentials_return_500_before_any_upstream_work() {
    // A real Graph client with no credentials: the failure must be the
    // configuration check, and nothing may be cached.
    let drive = std::sync::Arc::new(GraphClient::new(GraphConfig::default()));
    let app = TestApp::new(drive);

    let response = app.request("GET", "/api/files").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Failed to fetch files");
    assert!(
        response.body["details"]
            .as_str()
            .unwrap()
            .contains("credentials")
    );
    assert!(app.stored_record().await.is_none());
}

#[tokio::test]
async fn test_error_responses_omit_stack_outside_development() {
    let drive = std::sync::Arc::new(GraphClient::new(GraphConfig::default()));
    let app = TestApp::new(drive);

    let response = app.request("GET", "/api/files").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.get("stack").is_none());
}

#[tokio::test]
async fn test_uninitialized_store_short_circuits() {
    let app = TestApp::uninitialized();

    let response = app.request("GET", "/api/files").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({
            "error": "Server configuration error",
            "details": "Document store is not initialized"
        })
    );
}
