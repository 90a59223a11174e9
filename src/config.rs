use serde::Deserialize;
use std::env;
use thiserror::Error;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable was not provided.
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Connection parameters for the Qdrant vector store.
#[derive(Debug, Clone, Deserialize)]
pub struct QdrantConfig {
    /// Base URL of the Qdrant server.
    pub url: String,
    /// Port the Qdrant HTTP API listens on.
    pub port: u16,
    /// Name of the collection holding the document vectors.
    pub index_name: String,
}

/// Credentials for the OpenAI embeddings API.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API key used for bearer authentication.
    pub api_key: String,
}

/// Credentials and target project for the Todoist API.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoistConfig {
    /// API key used for bearer authentication.
    pub api_key: String,
    /// Name of the project tasks are created under.
    pub project: String,
}

/// Registry of all configuration categories, constructed once at process
/// start and shared by reference with every client that needs it.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Vector store connection parameters.
    pub qdrant: QdrantConfig,
    /// Embedding API credentials.
    pub openai: OpenAiConfig,
    /// Task API credentials and target project.
    pub todoist: TodoistConfig,
}

impl QdrantConfig {
    /// Load Qdrant connection parameters from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: load_env("QDRANT_URL")?,
            port: load_env("QDRANT_PORT")?
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QDRANT_PORT".to_string()))?,
            index_name: load_env("QDRANT_INDEX_NAME")?,
        })
    }
}

impl OpenAiConfig {
    /// Load OpenAI credentials from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: load_env("OPENAI_API_KEY")?,
        })
    }
}

impl TodoistConfig {
    /// Load Todoist credentials and the target project name from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: load_env("TODOIST_API_KEY")?,
            project: load_env("TODOIST_PROJECT")?,
        })
    }
}

impl Settings {
    /// Load every configuration category from the environment.
    ///
    /// An optional dotenv file is applied first: `DOTENV_FILE` names the
    /// file, defaulting to `.env`; a missing file is tolerated, and values
    /// already present in the environment win over file entries. Fails on
    /// the first missing or malformed value without constructing a partial
    /// registry.
    pub fn from_env() -> Result<Self, ConfigError> {
        let dotenv_file = env::var("DOTENV_FILE").unwrap_or_else(|_| ".env".to_string());
        dotenvy::from_filename(&dotenv_file).ok();

        let settings = Self {
            qdrant: QdrantConfig::from_env()?,
            openai: OpenAiConfig::from_env()?,
            todoist: TodoistConfig::from_env()?,
        };
        tracing::debug!(
            qdrant_url = %settings.qdrant.url,
            qdrant_port = settings.qdrant.port,
            index = %settings.qdrant.index_name,
            todoist_project = %settings.todoist.project,
            "Loaded configuration"
        );
        Ok(settings)
    }
}

fn load_env(key: &str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingVariable(key.to_string()))
}
