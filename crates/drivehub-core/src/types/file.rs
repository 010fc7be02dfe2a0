//! Normalized file metadata.

use serde::{Deserialize, Serialize};

/// Normalized representation of one remote file's metadata.
///
/// Immutable once fetched; carries no identity beyond `id`. The JSON
/// field names match the wire format consumed by clients: `downloadUrl`
/// is omitted entirely (never `null`) when the provider does not supply
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Opaque provider-assigned identifier.
    pub id: String,
    /// File name.
    pub name: String,
    /// Direct download URL, when the provider supplies one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Last modification time, as the provider's timestamp string.
    pub last_modified_date_time: String,
    /// File size in bytes.
    pub size: u64,
}
