//! Cached file listing.

pub mod service;
