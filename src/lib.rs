#![deny(missing_docs)]

//! Environment-backed settings plus thin asynchronous API clients.
//!
//! Three independent pieces, each usable standalone: a configuration
//! registry read from the process environment, a Todoist client that
//! creates tasks under a named project, and a vector store that answers
//! free-text queries by embedding them and searching a Qdrant collection.

/// Environment-driven configuration registry.
pub mod config;
/// Embedding client abstraction and the OpenAI adapter.
pub mod embedding;
/// Structured logging and tracing setup.
pub mod logging;
/// Todoist task-management client.
pub mod todoist;
/// Qdrant-backed semantic search pipeline.
pub mod vector_store;
