//! In-memory document store implementation using dashmap.

use async_trait::async_trait;
use dashmap::DashMap;

use drivehub_core::result::AppResult;
use drivehub_core::traits::store::DocumentStore;

/// In-memory document store for development and tests.
///
/// Documents live until overwritten; there is no eviction, matching the
/// store contract where validity is decided in-band by the caller.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    /// Documents keyed by `collection/key`.
    documents: DashMap<String, String>,
}

impl MemoryDocumentStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn document_key(collection: &str, key: &str) -> String {
        format!("{collection}/{key}")
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_document(&self, collection: &str, key: &str) -> AppResult<Option<String>> {
        let full_key = Self::document_key(collection, key);
        Ok(self.documents.get(&full_key).map(|doc| doc.value().clone()))
    }

    async fn set_document(&self, collection: &str, key: &str, value: &str) -> AppResult<()> {
        let full_key = Self::document_key(collection, key);
        self.documents.insert(full_key, value.to_string());
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
