//! OpenAI embeddings adapter.

use crate::embedding::{EmbeddingClient, EmbeddingError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Model identifier sent with every embeddings request. Must match the
/// model that produced the vectors already stored in the collection.
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP client for the OpenAI `/v1/embeddings` endpoint.
pub struct OpenAiEmbeddingClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingObject>,
}

#[derive(Deserialize)]
struct EmbeddingObject {
    embedding: Vec<f32>,
}

impl OpenAiEmbeddingClient {
    /// Construct a client authenticated with the given API key.
    pub fn new(api_key: &str) -> Result<Self, EmbeddingError> {
        let client = Client::builder()
            .user_agent("assistant-clients/0.1")
            .build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl EmbeddingClient for OpenAiEmbeddingClient {
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let url = format!("{}/embeddings", self.base_url.trim_end_matches('/'));
        let body = EmbeddingsRequest {
            input: text,
            model: EMBEDDING_MODEL,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = EmbeddingError::UnexpectedStatus { status, body };
            tracing::error!(model = EMBEDDING_MODEL, error = %error, "Embeddings request failed");
            return Err(error);
        }

        let payload: EmbeddingsResponse = response.json().await?;
        let embedding = payload
            .data
            .into_iter()
            .next()
            .map(|object| object.embedding)
            .ok_or(EmbeddingError::EmptyResponse)?;

        tracing::debug!(
            model = EMBEDDING_MODEL,
            dimension = embedding.len(),
            "Generated query embedding"
        );
        Ok(embedding)
    }
}
