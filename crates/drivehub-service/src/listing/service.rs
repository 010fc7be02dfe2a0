//! Cache-aside orchestration for the drive listing.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use drivehub_core::config::cache::CacheConfig;
use drivehub_core::result::AppResult;
use drivehub_core::traits::drive::DriveLister;
use drivehub_core::traits::store::DocumentStore;
use drivehub_core::types::{CacheRecord, FileListing, ListingSource};

/// Fetches the drive root listing through the document store cache.
///
/// The service holds exactly one cached listing, identified by the
/// configured collection and document key. Reads check freshness from
/// the record's in-band expiry; a miss or stale record triggers one
/// upstream call and a last-writer-wins overwrite of the record.
/// Concurrent refreshes are not deduplicated.
#[derive(Debug)]
pub struct ListingService {
    /// Document store holding the cache record.
    store: Arc<dyn DocumentStore>,
    /// Upstream drive client.
    drive: Arc<dyn DriveLister>,
    /// Cache identity and TTL.
    config: CacheConfig,
}

impl ListingService {
    /// Create a new listing service.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        drive: Arc<dyn DriveLister>,
        config: CacheConfig,
    ) -> Self {
        Self {
            store,
            drive,
            config,
        }
    }

    /// Return the file listing, from cache when fresh, otherwise from
    /// the drive with a cache refresh.
    pub async fn fetch_files(&self) -> AppResult<FileListing> {
        let now = Utc::now().timestamp_millis();

        if let Some(raw) = self
            .store
            .get_document(&self.config.collection, &self.config.document)
            .await?
        {
            match serde_json::from_str::<CacheRecord>(&raw) {
                Ok(record) if record.is_fresh(now) => {
                    debug!(expiry = record.expiry, "Serving listing from cache");
                    return Ok(FileListing {
                        files: record.files,
                        source: ListingSource::Cache,
                    });
                }
                Ok(record) => {
                    debug!(expiry = record.expiry, "Cached listing expired");
                }
                Err(err) => {
                    // An unreadable record behaves like a miss, the same
                    // way a record with a malformed expiry would.
                    warn!(error = %err, "Discarding undecodable cache record");
                }
            }
        }

        let files = self.drive.list_root_children().await?;
        let record = CacheRecord {
            files,
            expiry: now + self.config.ttl_ms as i64,
        };

        let payload = serde_json::to_string(&record)?;
        self.store
            .set_document(&self.config.collection, &self.config.document, &payload)
            .await?;

        info!(
            count = record.files.len(),
            expiry = record.expiry,
            "Refreshed listing from Graph"
        );

        Ok(FileListing {
            files: record.files,
            source: ListingSource::GraphApi,
        })
    }
}
