//! Remote drive listing trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::FileEntry;

/// Trait for remote drive clients that can list the root folder.
///
/// Implementations own credential handling; they must fail fast with a
/// configuration error before any network I/O when credentials are
/// missing.
#[async_trait]
pub trait DriveLister: Send + Sync + std::fmt::Debug + 'static {
    /// List the children of the drive's root folder, preserving upstream
    /// order.
    async fn list_root_children(&self) -> AppResult<Vec<FileEntry>>;
}
