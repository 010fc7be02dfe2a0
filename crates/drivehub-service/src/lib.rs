//! # drivehub-service
//!
//! Service layer for DriveHub: the cache-aside listing orchestration
//! over a document store and a drive client.

pub mod listing;

pub use listing::service::ListingService;
