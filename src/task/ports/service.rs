//! Service port for the task backend.

use crate::task::domain::{SearchQuery, Status, Task, TaskDraft, TaskId};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for task backend operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Message shown when no response was received.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";

/// Task backend contract.
///
/// Each operation performs at most one round trip. Implementations do not
/// retry.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Lists every task, normalizing the list response shape.
    async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>>;

    /// Fetches a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task>;

    /// Creates a task from a validated draft.
    async fn create_task(&self, draft: &TaskDraft) -> TaskServiceResult<Task>;

    /// Replaces the editable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> TaskServiceResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()>;

    /// Changes only the status of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    async fn update_status(&self, id: TaskId, status: Status) -> TaskServiceResult<Task>;

    /// Runs a server-side search with the populated query keys.
    async fn search_tasks(&self, query: &SearchQuery) -> TaskServiceResult<Vec<Task>>;

    /// Lists the status names the backend accepts.
    async fn list_statuses(&self) -> TaskServiceResult<Vec<String>>;

    /// Lists tasks with exactly the given status.
    async fn list_by_status(&self, status: Status) -> TaskServiceResult<Vec<Task>>;

    /// Lists tasks the backend considers overdue.
    async fn list_overdue(&self) -> TaskServiceResult<Vec<Task>>;
}

/// Errors returned by task backend implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskServiceError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// No response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with an error status.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The request could not be built or dispatched.
    #[error("request failed: {0}")]
    Request(String),

    /// The response could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl TaskServiceError {
    /// Builds a server error, falling back to a generic message.
    #[must_use]
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server {
            status,
            message: message.unwrap_or_else(|| format!("Server error ({status})")),
        }
    }

    /// Returns the message suitable for showing to a user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(id) => format!("Task {id} was not found"),
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::Server { message, .. } => message.clone(),
            Self::Request(_) => "Request failed - please try again".to_owned(),
            Self::InvalidResponse(_) => "Unexpected response from server".to_owned(),
        }
    }

    /// Returns whether the error means the task does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
