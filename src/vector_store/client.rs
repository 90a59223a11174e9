//! Embed-then-query search pipeline against Qdrant.

use crate::config::{OpenAiConfig, QdrantConfig};
use crate::embedding::{EmbeddingClient, OpenAiEmbeddingClient};
use crate::vector_store::types::{
    QueryResponse, QueryResponseResult, SearchHit, VectorStoreError,
};
use reqwest::Client;
use serde_json::{Value, json};

/// Result limit applied when callers have no preference.
pub const DEFAULT_TOP_K: usize = 5;

/// Semantic search client over one Qdrant collection.
///
/// Both remote-service handles (the Qdrant HTTP client and the embedding
/// client) are built eagerly at construction, so a successfully constructed
/// store is always usable.
pub struct VectorStore {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) collection_name: String,
    pub(crate) embedder: Box<dyn EmbeddingClient + Send + Sync>,
}

impl std::fmt::Debug for VectorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorStore")
            .field("base_url", &self.base_url)
            .field("collection_name", &self.collection_name)
            .finish_non_exhaustive()
    }
}

impl VectorStore {
    /// Construct a store for the configured collection, embedding queries
    /// through the OpenAI API.
    ///
    /// Fails with [`VectorStoreError::InvalidConfig`] when the URL is empty
    /// or the port is zero, before any connection is touched.
    pub fn new(qdrant: &QdrantConfig, openai: &OpenAiConfig) -> Result<Self, VectorStoreError> {
        if qdrant.url.trim().is_empty() || qdrant.port == 0 {
            return Err(VectorStoreError::InvalidConfig(
                "URL and port must be set".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent("assistant-clients/0.1")
            .build()?;
        let embedder = Box::new(OpenAiEmbeddingClient::new(&openai.api_key)?);
        let base_url = format!("{}:{}", qdrant.url.trim_end_matches('/'), qdrant.port);
        tracing::debug!(
            url = %base_url,
            collection = %qdrant.index_name,
            "Initialized vector store client"
        );

        Ok(Self {
            client,
            base_url,
            collection_name: qdrant.index_name.clone(),
            embedder,
        })
    }

    /// Search the collection for the documents closest to the query text.
    ///
    /// Embeds the query, issues a nearest-neighbor search requesting `top_k`
    /// hits, and extracts the `document` payload field from each hit in the
    /// order the database returns them. Returns at most `top_k` hits, fewer
    /// when the collection holds fewer matches.
    pub async fn search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchHit>, VectorStoreError> {
        if top_k == 0 {
            return Err(VectorStoreError::InvalidTopK(top_k));
        }

        // The query vector is a data dependency of the search, so the two
        // remote calls are strictly sequential.
        let vector = self.embedder.embed_query(query).await?;

        let body = json!({
            "query": vector,
            "limit": top_k,
            "with_payload": true,
        });
        let url = format!(
            "{}/collections/{}/points/query",
            self.base_url.trim_end_matches('/'),
            self.collection_name
        );

        let response = self.client.post(url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = VectorStoreError::UnexpectedStatus { status, body };
            tracing::error!(collection = %self.collection_name, error = %error, "Qdrant search failed");
            return Err(error);
        }

        let payload: QueryResponse = response.json().await?;
        let points = match payload.result {
            QueryResponseResult::Points(points) => points,
            QueryResponseResult::Object { points } => points,
        };

        let mut hits = Vec::with_capacity(points.len());
        for point in points {
            let document = point
                .payload
                .as_ref()
                .and_then(|payload| payload.get("document"))
                .and_then(Value::as_str)
                .ok_or_else(|| VectorStoreError::MalformedPayload {
                    id: stringify_point_id(point.id),
                })?;
            hits.push(SearchHit {
                document: document.to_string(),
                score: point.score,
            });
        }

        tracing::debug!(
            collection = %self.collection_name,
            requested = top_k,
            returned = hits.len(),
            "Search completed"
        );
        Ok(hits)
    }
}

fn stringify_point_id(id: Value) -> String {
    match id {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
