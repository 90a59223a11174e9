//! Shared types used by the Todoist client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while interacting with Todoist.
#[derive(Debug, Error)]
pub enum TodoistError {
    /// HTTP layer failed before receiving a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Todoist responded with an unexpected status code.
    #[error("Unexpected Todoist response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned from Todoist.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
    /// No project with the configured name is visible to the credential.
    #[error("Project '{0}' not found")]
    ProjectNotFound(String),
}

/// Project visible to the configured credential.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Identifier assigned by Todoist.
    pub id: String,
    /// Human-readable project name.
    pub name: String,
}

/// Task created through the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    /// Identifier assigned by Todoist.
    pub id: String,
    /// Task title.
    pub content: String,
    /// Optional free-text details.
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier of the project the task belongs to.
    pub project_id: String,
    /// Web link to the task, when the API provides one.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct CreateTaskRequest<'a> {
    pub(crate) content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<&'a str>,
    pub(crate) project_id: &'a str,
}
