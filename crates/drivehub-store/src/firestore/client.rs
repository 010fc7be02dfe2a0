//! Firestore REST connection management.

use tracing::info;

use drivehub_core::config::store::FirestoreConfig;
use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;

/// Firestore REST client wrapper.
///
/// Holds the HTTP client and the validated project coordinates; URL
/// construction for document paths lives here so the operations module
/// never assembles endpoints by hand.
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// Validated Firestore configuration.
    config: FirestoreConfig,
}

impl FirestoreClient {
    /// Create a new Firestore client from configuration.
    ///
    /// Fails with a configuration error when any mandatory setting is
    /// missing, mirroring the store's refusal to start half-configured.
    pub fn new(config: &FirestoreConfig) -> AppResult<Self> {
        validate(config)?;

        info!(project_id = %config.project_id, "Connecting to Firestore");

        Ok(Self {
            http: reqwest::Client::new(),
            config: config.clone(),
        })
    }

    /// Get a reference to the HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The Firebase web API key passed on every request.
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Build the full REST URL for one document.
    pub fn document_url(&self, collection: &str, key: &str) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{collection}/{key}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.project_id,
            self.config.database,
        )
    }
}

/// Check the mandatory Firebase settings, naming the first one missing.
fn validate(config: &FirestoreConfig) -> AppResult<()> {
    let mandatory = [
        ("api_key", &config.api_key),
        ("project_id", &config.project_id),
        ("app_id", &config.app_id),
    ];

    for (name, value) in mandatory {
        if value.is_empty() {
            return Err(AppError::configuration(format!(
                "Missing mandatory Firestore setting '{name}'"
            )));
        }
    }

    Ok(())
}
