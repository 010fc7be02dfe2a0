//! # drivehub-graph
//!
//! Microsoft Graph client for DriveHub: client-credentials token
//! acquisition and the root-folder listing call, normalized into
//! [`drivehub_core::types::FileEntry`] values.

pub mod client;
pub mod types;

pub use client::GraphClient;
