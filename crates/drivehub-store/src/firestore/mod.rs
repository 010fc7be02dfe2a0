//! Firestore REST document store backend.

pub mod client;
pub mod documents;

pub use client::FirestoreClient;
pub use documents::FirestoreDocumentStore;
