//! Embedding client abstraction.
//!
//! The vector store consumes embeddings through the [`EmbeddingClient`]
//! trait so the search pipeline can be exercised without the hosted API.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub mod openai;

pub use openai::OpenAiEmbeddingClient;

/// Errors raised by embedding providers.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// HTTP layer failed before receiving a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Provider responded with an unexpected status code.
    #[error("Unexpected embeddings response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the provider.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
    /// Provider returned a well-formed response with no embedding in it.
    #[error("Embeddings response contained no data")]
    EmptyResponse,
}

/// Interface implemented by embedding backends.
#[async_trait]
pub trait EmbeddingClient {
    /// Produce an embedding vector for the supplied query text.
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}
