//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Top-level document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider type: `"firestore"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Firestore-specific configuration.
    #[serde(default)]
    pub firestore: FirestoreConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            firestore: FirestoreConfig::default(),
        }
    }
}

/// Firestore backend configuration.
///
/// The full Firebase web-app parameter set is accepted; `api_key`,
/// `project_id`, and `app_id` are mandatory and checked when the backend
/// is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirestoreConfig {
    /// Firebase web API key.
    #[serde(default)]
    pub api_key: String,
    /// Firebase auth domain.
    #[serde(default)]
    pub auth_domain: String,
    /// Firebase project id.
    #[serde(default)]
    pub project_id: String,
    /// Firebase storage bucket.
    #[serde(default)]
    pub storage_bucket: String,
    /// Firebase messaging sender id.
    #[serde(default)]
    pub messaging_sender_id: String,
    /// Firebase app id.
    #[serde(default)]
    pub app_id: String,
    /// Firestore REST endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Firestore database id.
    #[serde(default = "default_database")]
    pub database: String,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_domain: String::new(),
            project_id: String::new(),
            storage_bucket: String::new(),
            messaging_sender_id: String::new(),
            app_id: String::new(),
            endpoint: default_endpoint(),
            database: default_database(),
        }
    }
}

fn default_provider() -> String {
    "firestore".to_string()
}

fn default_endpoint() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_database() -> String {
    "(default)".to_string()
}
