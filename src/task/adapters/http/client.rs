//! reqwest-backed implementation of the task service port.

use super::error::{status_error, transport_error};
use crate::task::{
    domain::{SearchQuery, Status, Task, TaskDraft, TaskId},
    ports::{TaskService, TaskServiceError, TaskServiceResult},
    search::normalize_list,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Connection settings for [`HttpTaskService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Base URL of the API, e.g. `http://localhost:4000/api`.
    pub api_base: Url,
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    /// Creates a configuration with transport-default timeouts.
    #[must_use]
    pub const fn new(api_base: Url) -> Self {
        Self {
            api_base,
            timeout: None,
        }
    }

    /// Sets a whole-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Errors raised while constructing the HTTP adapter.
#[derive(Debug, Error)]
pub enum HttpSetupError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The API base URL cannot have paths joined onto it.
    #[error("API base URL cannot be used as a base: {0}")]
    InvalidBase(Url),
}

/// Task backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTaskService {
    http: Client,
    base: Url,
}

impl HttpTaskService {
    /// Creates an adapter for the API at `config.api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpSetupError`] when the base URL is unusable or the HTTP
    /// client cannot be built.
    pub fn new(config: HttpClientConfig) -> Result<Self, HttpSetupError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base: directory_base(config.api_base)?,
        })
    }

    /// Returns the normalized API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> TaskServiceResult<Url> {
        self.base
            .join(path)
            .map_err(|err| TaskServiceError::Request(format!("invalid endpoint '{path}': {err}")))
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        scope: Option<TaskId>,
    ) -> TaskServiceResult<Response> {
        let response = request.send().await.map_err(|err| {
            let mapped = transport_error(&err);
            tracing::warn!(url = ?err.url().map(Url::as_str), %mapped, "task request got no response");
            mapped
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        let err = status_error(status, &body, scope);
        tracing::warn!(%url, status = status.as_u16(), %err, "task request failed");
        Err(err)
    }

    async fn fetch_json(&self, path: &str, scope: Option<TaskId>) -> TaskServiceResult<Value> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let response = self.execute(self.http.get(url), scope).await?;
        read_json(response).await
    }

    async fn fetch_list(&self, path: &str) -> TaskServiceResult<Vec<Task>> {
        Ok(normalize_list(self.fetch_json(path, None).await?))
    }
}

#[async_trait]
impl TaskService for HttpTaskService {
    async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        self.fetch_list("tasks").await
    }

    async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let value = self.fetch_json(&format!("tasks/{id}"), Some(id)).await?;
        decode(value)
    }

    async fn create_task(&self, draft: &TaskDraft) -> TaskServiceResult<Task> {
        let url = self.endpoint("tasks")?;
        tracing::debug!(%url, "POST");
        let response = self.execute(self.http.post(url).json(draft), None).await?;
        decode(read_json(response).await?)
    }

    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> TaskServiceResult<Task> {
        let url = self.endpoint(&format!("tasks/{id}"))?;
        tracing::debug!(%url, "PUT");
        let response = self.execute(self.http.put(url).json(draft), Some(id)).await?;
        decode(read_json(response).await?)
    }

    async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        let url = self.endpoint(&format!("tasks/{id}"))?;
        tracing::debug!(%url, "DELETE");
        self.execute(self.http.delete(url), Some(id)).await?;
        Ok(())
    }

    async fn update_status(&self, id: TaskId, status: Status) -> TaskServiceResult<Task> {
        let url = self.endpoint(&format!("tasks/{id}/status"))?;
        tracing::debug!(%url, %status, "PUT");
        let request = self.http.put(url).query(&[("status", status.as_str())]);
        let response = self.execute(request, Some(id)).await?;
        decode(read_json(response).await?)
    }

    async fn search_tasks(&self, query: &SearchQuery) -> TaskServiceResult<Vec<Task>> {
        let url = self.endpoint("tasks/search")?;
        let params = query.params();
        tracing::debug!(%url, ?params, "GET");
        let response = self.execute(self.http.get(url).query(&params), None).await?;
        Ok(normalize_list(read_json(response).await?))
    }

    async fn list_statuses(&self) -> TaskServiceResult<Vec<String>> {
        decode(self.fetch_json("tasks/statuses", None).await?)
    }

    async fn list_by_status(&self, status: Status) -> TaskServiceResult<Vec<Task>> {
        self.fetch_list(&format!("tasks/status/{status}")).await
    }

    async fn list_overdue(&self) -> TaskServiceResult<Vec<Task>> {
        self.fetch_list("tasks/overdue").await
    }
}

/// Ensures the base path ends with `/` so relative joins append to it.
fn directory_base(mut base: Url) -> Result<Url, HttpSetupError> {
    if base.cannot_be_a_base() {
        return Err(HttpSetupError::InvalidBase(base));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

async fn read_json(response: Response) -> TaskServiceResult<Value> {
    response
        .json::<Value>()
        .await
        .map_err(|err| TaskServiceError::InvalidResponse(err.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> TaskServiceResult<T> {
    serde_json::from_value(value).map_err(|err| TaskServiceError::InvalidResponse(err.to_string()))
}
