//! Qdrant-backed semantic search over a document collection.

pub mod client;
pub mod types;

pub use client::{DEFAULT_TOP_K, VectorStore};
pub use types::{SearchHit, VectorStoreError};
