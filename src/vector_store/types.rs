//! Shared types used by the vector store client.

use crate::embedding::EmbeddingError;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors returned while searching the vector store.
#[derive(Debug, Error)]
pub enum VectorStoreError {
    /// Connection parameters failed validation at construction time.
    #[error("Invalid vector store configuration: {0}")]
    InvalidConfig(String),
    /// A non-positive result limit was requested.
    #[error("top_k must be a positive integer, got {0}")]
    InvalidTopK(usize),
    /// Embedding the query text failed.
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
    /// HTTP layer failed before receiving a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Qdrant responded with an unexpected status code.
    #[error("Unexpected Qdrant response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned from Qdrant.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
    /// A hit's payload was missing the expected `document` string field.
    #[error("Point '{id}' payload is missing a 'document' string field")]
    MalformedPayload {
        /// Identifier of the offending point.
        id: String,
    },
}

/// Scored document returned by a search, in database rank order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Document text extracted from the hit's payload.
    pub document: String,
    /// Similarity score computed by Qdrant.
    pub score: f32,
}

#[derive(Deserialize)]
pub(crate) struct QueryResponse {
    pub(crate) result: QueryResponseResult,
}

// Qdrant returned a bare point array before 1.10 and wraps it in an object
// with a `points` field afterwards; accept both shapes.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum QueryResponseResult {
    Points(Vec<QueryPoint>),
    Object {
        #[serde(default)]
        points: Vec<QueryPoint>,
    },
}

#[derive(Deserialize)]
pub(crate) struct QueryPoint {
    pub(crate) id: Value,
    pub(crate) score: f32,
    #[serde(default)]
    pub(crate) payload: Option<Map<String, Value>>,
}
