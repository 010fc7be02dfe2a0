//! Cached listing types.

use serde::{Deserialize, Serialize};

use super::file::FileEntry;

/// The single cached file listing.
///
/// Created or overwritten on every successful upstream fetch, read on
/// every request, never deleted. A record is valid iff `expiry` lies in
/// the future; no other validity checks are performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Files in upstream order.
    pub files: Vec<FileEntry>,
    /// Absolute expiry timestamp, milliseconds since the Unix epoch.
    pub expiry: i64,
}

impl CacheRecord {
    /// Whether this record is still valid at `now` (epoch milliseconds).
    pub fn is_fresh(&self, now: i64) -> bool {
        self.expiry > now
    }
}

/// Where a returned listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingSource {
    /// Served from the document store without an upstream call.
    Cache,
    /// Fetched from Microsoft Graph and freshly cached.
    GraphApi,
}

/// A file listing together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListing {
    /// Files in upstream order.
    pub files: Vec<FileEntry>,
    /// Whether the listing came from the cache or the upstream API.
    pub source: ListingSource,
}
