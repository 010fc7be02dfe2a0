//! Wire types for the Microsoft Graph API.

use serde::Deserialize;

use drivehub_core::types::FileEntry;

/// Field selection requested from the listing endpoint.
pub(crate) const SELECT_FIELDS: &str =
    "id,name,size,lastModifiedDateTime,@microsoft.graph.downloadUrl";

/// Response from the OAuth token endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

/// Response from the drive children listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DriveChildrenResponse {
    #[serde(default)]
    pub value: Vec<RawDriveItem>,
}

/// One item as returned by Graph, before normalization.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDriveItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "lastModifiedDateTime", default)]
    pub last_modified_date_time: String,
    #[serde(rename = "@microsoft.graph.downloadUrl")]
    pub download_url: Option<String>,
}

impl From<RawDriveItem> for FileEntry {
    fn from(item: RawDriveItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            download_url: item.download_url,
            last_modified_date_time: item.last_modified_date_time,
            size: item.size,
        }
    }
}
