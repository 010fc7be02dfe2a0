//! Document store trait for pluggable storage backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for document store backends (Firestore or in-memory).
///
/// Document values are serialized as strings (JSON). Documents carry no
/// store-side expiry; validity of cached data is decided by the caller
/// from fields inside the document.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read a document. Returns `None` when the document does not exist.
    async fn get_document(&self, collection: &str, key: &str) -> AppResult<Option<String>>;

    /// Create or overwrite a document.
    async fn set_document(&self, collection: &str, key: &str, value: &str) -> AppResult<()>;

    /// Check that the store backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a typed document by deserializing from JSON.
    async fn get_json<T: serde::de::DeserializeOwned + Send>(
        &self,
        collection: &str,
        key: &str,
    ) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get_document(collection, key).await? {
            Some(value) => {
                let parsed = serde_json::from_str(&value)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Write a typed document by serializing to JSON.
    async fn set_json<T: serde::Serialize + Send + Sync>(
        &self,
        collection: &str,
        key: &str,
        value: &T,
    ) -> AppResult<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set_document(collection, key, &json).await
    }
}
