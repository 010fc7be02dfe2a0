//! Firestore document operations.
//!
//! Each document carries the stored value as a single `payload` string
//! field, so records round-trip without mapping every field onto
//! Firestore's typed value encoding.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use drivehub_core::error::{AppError, ErrorKind};
use drivehub_core::result::AppResult;
use drivehub_core::traits::store::DocumentStore;

use super::client::FirestoreClient;

/// Firestore-backed document store.
#[derive(Debug, Clone)]
pub struct FirestoreDocumentStore {
    /// Firestore REST client.
    client: FirestoreClient,
}

/// Firestore REST document shape, reduced to the single payload field.
#[derive(Debug, Serialize, Deserialize)]
struct FirestoreDocument {
    fields: DocumentFields,
}

#[derive(Debug, Serialize, Deserialize)]
struct DocumentFields {
    payload: StringValue,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StringValue {
    string_value: String,
}

impl FirestoreDocumentStore {
    /// Create a new Firestore document store.
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    /// Map a transport error to an AppError.
    fn map_err(e: reqwest::Error) -> AppError {
        AppError::with_source(ErrorKind::Store, format!("Firestore request error: {e}"), e)
    }
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    async fn get_document(&self, collection: &str, key: &str) -> AppResult<Option<String>> {
        let url = self.client.document_url(collection, key);
        let response = self
            .client
            .http()
            .get(&url)
            .query(&[("key", self.client.api_key())])
            .send()
            .await
            .map_err(Self::map_err)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(collection, key, "Document not found");
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::store(format!(
                "Firestore read returned {status}: {body}"
            )));
        }

        let document: FirestoreDocument = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to parse Firestore document", e)
        })?;

        Ok(Some(document.fields.payload.string_value))
    }

    async fn set_document(&self, collection: &str, key: &str, value: &str) -> AppResult<()> {
        let url = self.client.document_url(collection, key);
        let document = FirestoreDocument {
            fields: DocumentFields {
                payload: StringValue {
                    string_value: value.to_string(),
                },
            },
        };

        let response = self
            .client
            .http()
            .patch(&url)
            .query(&[
                ("key", self.client.api_key()),
                ("updateMask.fieldPaths", "payload"),
            ])
            .json(&document)
            .send()
            .await
            .map_err(Self::map_err)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::store(format!(
                "Firestore write returned {status}: {body}"
            )));
        }

        debug!(collection, key, "Document written");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        // Any HTTP response means the backend is reachable; only a
        // transport failure counts against it.
        let url = self.client.document_url("health", "probe");
        let result = self
            .client
            .http()
            .get(&url)
            .query(&[("key", self.client.api_key())])
            .send()
            .await;

        Ok(result.is_ok())
    }
}
