//! # drivehub-store
//!
//! Document store implementations for DriveHub. Supports two modes:
//!
//! - **firestore**: Firestore REST backend over [reqwest](https://crates.io/crates/reqwest)
//! - **memory**: In-process store using [dashmap](https://crates.io/crates/dashmap)
//!
//! The backend is selected at runtime based on configuration.

#[cfg(feature = "firestore")]
pub mod firestore;
pub mod manager;
#[cfg(feature = "memory")]
pub mod memory;

pub use manager::StoreManager;
