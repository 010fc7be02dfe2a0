//! Response DTOs.

use serde::{Deserialize, Serialize};

use drivehub_core::types::{FileEntry, FileListing, ListingSource};

/// Successful file listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    /// Files in upstream order.
    pub files: Vec<FileEntry>,
    /// `"cache"` or `"graph-api"`.
    pub source: ListingSource,
}

impl From<FileListing> for FileListResponse {
    fn from(listing: FileListing) -> Self {
        Self {
            files: listing.files,
            source: listing.source,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Document store status.
    pub store: String,
}
