//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use drivehub_core::config::store::StoreConfig;
use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;
use drivehub_core::traits::store::DocumentStore;

/// Store manager that wraps the configured document store backend.
///
/// The backend is selected at construction time based on configuration.
/// Construction fails with a configuration error when mandatory backend
/// settings are missing; the caller decides whether that failure is
/// fatal or degrades into per-request configuration errors.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner document store.
    inner: Arc<dyn DocumentStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn DocumentStore> = match config.provider.as_str() {
            #[cfg(feature = "firestore")]
            "firestore" => {
                info!("Initializing Firestore document store");
                let client = crate::firestore::FirestoreClient::new(&config.firestore)?;
                Arc::new(crate::firestore::FirestoreDocumentStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory document store");
                Arc::new(crate::memory::MemoryDocumentStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: firestore, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing backend (for testing).
    pub fn from_provider(provider: Arc<dyn DocumentStore>) -> Self {
        Self { inner: provider }
    }

    /// Get a reference to the inner backend.
    pub fn provider(&self) -> &dyn DocumentStore {
        self.inner.as_ref()
    }
}

#[async_trait]
impl DocumentStore for StoreManager {
    async fn get_document(&self, collection: &str, key: &str) -> AppResult<Option<String>> {
        self.inner.get_document(collection, key).await
    }

    async fn set_document(&self, collection: &str, key: &str, value: &str) -> AppResult<()> {
        self.inner.set_document(collection, key, value).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivehub_core::error::ErrorKind;

    #[test]
    fn test_unknown_provider_is_rejected() {
        let config = StoreConfig {
            provider: "etcd".to_string(),
            ..StoreConfig::default()
        };
        let err = StoreManager::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_memory_provider_constructs() {
        let config = StoreConfig {
            provider: "memory".to_string(),
            ..StoreConfig::default()
        };
        assert!(StoreManager::new(&config).is_ok());
    }

    #[test]
    fn test_firestore_requires_mandatory_settings() {
        // Default config has provider "firestore" with empty credentials.
        let err = StoreManager::new(&StoreConfig::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
