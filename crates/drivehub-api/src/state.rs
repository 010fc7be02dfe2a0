//! Application state shared across all handlers.

use std::sync::Arc;

use drivehub_core::config::AppConfig;
use drivehub_service::ListingService;
use drivehub_store::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. The store and the
/// listing service are `None` when document store initialization failed
/// at startup; the files handler then short-circuits with a
/// configuration error instead of attempting any work.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Document store, when initialization succeeded.
    pub store: Option<Arc<StoreManager>>,
    /// Cached listing service, when initialization succeeded.
    pub listing: Option<Arc<ListingService>>,
}
