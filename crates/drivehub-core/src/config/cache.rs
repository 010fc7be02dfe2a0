//! Listing cache configuration.

use serde::{Deserialize, Serialize};

/// Cached-listing configuration.
///
/// The design supports exactly one cached listing globally, so the
/// collection and document key identify a single fixed record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Store collection holding the cache record.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Document key of the single cache record.
    #[serde(default = "default_document")]
    pub document: String,
    /// Time-to-live for a cached listing, in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            document: default_document(),
            ttl_ms: default_ttl_ms(),
        }
    }
}

fn default_collection() -> String {
    "cache".to_string()
}

fn default_document() -> String {
    "files".to_string()
}

fn default_ttl_ms() -> u64 {
    3_600_000 // 1 hour
}
