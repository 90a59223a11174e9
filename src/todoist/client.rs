//! HTTP client wrapper for the Todoist REST API.

use crate::todoist::types::{CreateTaskRequest, Project, Task, TodoistError};
use reqwest::{Client, Method};

const DEFAULT_BASE_URL: &str = "https://api.todoist.com/rest/v2";

/// Lightweight HTTP client that creates tasks under one named project.
pub struct TodoistClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) project: String,
}

impl TodoistClient {
    /// Construct a client for the given credential and target project name.
    pub fn new(api_key: &str, project: &str) -> Result<Self, TodoistError> {
        let client = Client::builder()
            .user_agent("assistant-clients/0.1")
            .build()?;
        tracing::debug!(project, "Initialized Todoist HTTP client");
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
            project: project.to_string(),
        })
    }

    /// Resolve the configured project name to its identifier.
    ///
    /// Lists every project visible to the credential and returns the first
    /// exact, case-sensitive name match. The REST v2 `/projects` endpoint
    /// returns the full list in one response, so no pagination loop is
    /// needed.
    pub async fn find_project_id(&self) -> Result<String, TodoistError> {
        let response = self.request(Method::GET, "projects").send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = TodoistError::UnexpectedStatus { status, body };
            tracing::error!(error = %error, "Failed to list projects");
            return Err(error);
        }

        let projects: Vec<Project> = response.json().await?;
        projects
            .into_iter()
            .find(|candidate| candidate.name == self.project)
            .map(|project| project.id)
            .ok_or_else(|| TodoistError::ProjectNotFound(self.project.clone()))
    }

    /// Create a task with the given title and optional details under the
    /// configured project.
    ///
    /// The project id is resolved on every invocation rather than cached, so
    /// a rename or deletion of the project is always detected at the cost of
    /// one extra round-trip.
    pub async fn add_task(
        &self,
        title: &str,
        details: Option<&str>,
    ) -> Result<Task, TodoistError> {
        let project_id = self.find_project_id().await?;
        let body = CreateTaskRequest {
            content: title,
            description: details,
            project_id: &project_id,
        };

        let response = self
            .request(Method::POST, "tasks")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = TodoistError::UnexpectedStatus { status, body };
            tracing::error!(project_id = %project_id, error = %error, "Failed to create task");
            return Err(error);
        }

        let task: Task = response.json().await?;
        tracing::debug!(task_id = %task.id, project_id = %task.project_id, "Task created");
        Ok(task)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let base = self.base_url.trim_end_matches('/');
        let url = format!("{base}/{path}");
        self.client.request(method, url).bearer_auth(&self.api_key)
    }
}
