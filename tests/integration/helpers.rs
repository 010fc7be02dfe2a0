//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use drivehub_core::config::AppConfig;
use drivehub_core::config::cache::CacheConfig;
use drivehub_core::result::AppResult;
use drivehub_core::traits::drive::DriveLister;
use drivehub_core::traits::store::DocumentStore;
use drivehub_core::types::{CacheRecord, FileEntry};
use drivehub_service::ListingService;
use drivehub_store::StoreManager;
use drivehub_store::memory::MemoryDocumentStore;

/// Drive double that counts upstream calls and serves a fixed listing.
#[derive(Debug)]
pub struct CountingDrive {
    calls: AtomicUsize,
    files: Vec<FileEntry>,
}

impl CountingDrive {
    /// Create a drive double returning the given listing.
    pub fn returning(files: Vec<FileEntry>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            files,
        })
    }

    /// Number of upstream listing calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DriveLister for CountingDrive {
    async fn list_root_children(&self) -> AppResult<Vec<FileEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.files.clone())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory document store for seeding and inspection
    pub store: Arc<MemoryDocumentStore>,
    /// Cache identity used by the service under test
    pub cache: CacheConfig,
}

impl TestApp {
    /// Create a test application around the given drive client.
    pub fn new(drive: Arc<dyn DriveLister>) -> Self {
        let config = AppConfig::default();
        let cache = config.cache.clone();

        let store = Arc::new(MemoryDocumentStore::new());
        let manager = Arc::new(StoreManager::from_provider(
            Arc::clone(&store) as Arc<dyn DocumentStore>
        ));

        let listing = Arc::new(ListingService::new(
            Arc::clone(&manager) as Arc<dyn DocumentStore>,
            drive,
            cache.clone(),
        ));

        let state = drivehub_api::state::AppState {
            config: Arc::new(config),
            store: Some(manager),
            listing: Some(listing),
        };

        Self {
            router: drivehub_api::router::build_router(state),
            store,
            cache,
        }
    }

    /// Create a test application whose document store never initialized.
    pub fn uninitialized() -> Self {
        let state = drivehub_api::state::AppState {
            config: Arc::new(AppConfig::default()),
            store: None,
            listing: None,
        };

        Self {
            router: drivehub_api::router::build_router(state),
            store: Arc::new(MemoryDocumentStore::new()),
            cache: CacheConfig::default(),
        }
    }

    /// Seed the cache record directly in the store.
    pub async fn seed_record(&self, files: Vec<FileEntry>, expiry: i64) {
        let record = CacheRecord { files, expiry };
        self.store
            .set_document(
                &self.cache.collection,
                &self.cache.document,
                &serde_json::to_string(&record).expect("serialize record"),
            )
            .await
            .expect("seed record");
    }

    /// Read the cache record back out of the store.
    pub async fn stored_record(&self) -> Option<CacheRecord> {
        self.store
            .get_document(&self.cache.collection, &self.cache.document)
            .await
            .expect("read record")
            .map(|raw| serde_json::from_str(&raw).expect("parse record"))
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// A small fixed listing used across tests.
pub fn sample_files() -> Vec<FileEntry> {
    vec![FileEntry {
        id: "1".to_string(),
        name: "a.txt".to_string(),
        download_url: None,
        last_modified_date_time: "2024-01-01T00:00:00Z".to_string(),
        size: 10,
    }]
}
