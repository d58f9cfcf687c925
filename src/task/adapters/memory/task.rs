//! In-memory task backend for tests and demonstrations.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{SearchQuery, Status, Task, TaskDraft, TaskId},
    ports::{TaskService, TaskServiceError, TaskServiceResult},
    search::apply_query,
};

/// Backend call recorded by [`InMemoryTaskService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    /// `GET /tasks`.
    List,
    /// `GET /tasks/{id}`.
    Get(TaskId),
    /// `POST /tasks`.
    Create,
    /// `PUT /tasks/{id}`.
    Update(TaskId),
    /// `DELETE /tasks/{id}`.
    Delete(TaskId),
    /// `PUT /tasks/{id}/status`.
    UpdateStatus(TaskId, Status),
    /// `GET /tasks/search`.
    Search(SearchQuery),
    /// `GET /tasks/statuses`.
    ListStatuses,
    /// `GET /tasks/status/{status}`.
    ListByStatus(Status),
    /// `GET /tasks/overdue`.
    ListOverdue,
}

/// Thread-safe in-memory task backend.
///
/// Assigns sequential ids, records every call, and can simulate an
/// unavailable search endpoint.
#[derive(Clone)]
pub struct InMemoryTaskService {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
    statuses: Vec<String>,
    search_offline: bool,
    calls: Vec<ServiceCall>,
}

impl InMemoryTaskService {
    /// Creates an empty backend using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty backend using `clock` for overdue checks.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        let state = InMemoryTaskState {
            statuses: Status::ALL.iter().map(|status| status.as_str().to_owned()).collect(),
            ..InMemoryTaskState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
            clock,
        }
    }

    /// Seeds the backend with existing tasks, keeping their ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the internal lock is poisoned.
    pub fn seed(&self, tasks: impl IntoIterator<Item = Task>) -> TaskServiceResult<()> {
        let mut state = self.write()?;
        for task in tasks {
            state.last_id = state.last_id.max(task.id().value());
            state.tasks.insert(task.id(), task);
        }
        Ok(())
    }

    /// Makes the search endpoint fail (or recover).
    ///
    /// # Errors
    ///
    /// Returns an error if the internal lock is poisoned.
    pub fn set_search_offline(&self, offline: bool) -> TaskServiceResult<()> {
        self.write()?.search_offline = offline;
        Ok(())
    }

    /// Replaces the status names reported by the statuses endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the internal lock is poisoned.
    pub fn set_statuses(&self, statuses: Vec<String>) -> TaskServiceResult<()> {
        self.write()?.statuses = statuses;
        Ok(())
    }

    /// Returns the calls received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the internal lock is poisoned.
    pub fn calls(&self) -> TaskServiceResult<Vec<ServiceCall>> {
        Ok(self.read()?.calls.clone())
    }

    fn read(&self) -> TaskServiceResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskServiceError::InvalidResponse(err.to_string()))
    }

    fn write(&self) -> TaskServiceResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskServiceError::InvalidResponse(err.to_string()))
    }

    fn record(&self, call: ServiceCall) -> TaskServiceResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        let mut state = self.write()?;
        state.calls.push(call);
        Ok(state)
    }
}

impl Default for InMemoryTaskService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryTaskService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryTaskService")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TaskService for InMemoryTaskService {
    async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let state = self.record(ServiceCall::List)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let state = self.record(ServiceCall::Get(id))?;
        state
            .tasks
            .get(&id)
            .cloned()
            .ok_or(TaskServiceError::NotFound(id))
    }

    async fn create_task(&self, draft: &TaskDraft) -> TaskServiceResult<Task> {
        let mut state = self.record(ServiceCall::Create)?;
        state.last_id += 1;
        let id = TaskId::new(state.last_id);
        let task = Task::new(id, "", draft.status().unwrap_or(Status::New))
            .with_tasknum(id.value())
            .merged_with(draft);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> TaskServiceResult<Task> {
        let mut state = self.record(ServiceCall::Update(id))?;
        let existing = state
            .tasks
            .remove(&id)
            .ok_or(TaskServiceError::NotFound(id))?;
        let updated = existing.merged_with(draft);
        state.tasks.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        let mut state = self.record(ServiceCall::Delete(id))?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskServiceError::NotFound(id))
    }

    async fn update_status(&self, id: TaskId, status: Status) -> TaskServiceResult<Task> {
        let mut state = self.record(ServiceCall::UpdateStatus(id, status))?;
        let existing = state
            .tasks
            .remove(&id)
            .ok_or(TaskServiceError::NotFound(id))?;
        let updated = existing.with_status(status);
        state.tasks.insert(id, updated.clone());
        Ok(updated)
    }

    async fn search_tasks(&self, query: &SearchQuery) -> TaskServiceResult<Vec<Task>> {
        let state = self.record(ServiceCall::Search(query.clone()))?;
        if state.search_offline {
            return Err(TaskServiceError::server(
                503,
                Some("search is unavailable".to_owned()),
            ));
        }
        Ok(apply_query(state.tasks.values().cloned().collect(), query))
    }

    async fn list_statuses(&self) -> TaskServiceResult<Vec<String>> {
        let state = self.record(ServiceCall::ListStatuses)?;
        Ok(state.statuses.clone())
    }

    async fn list_by_status(&self, status: Status) -> TaskServiceResult<Vec<Task>> {
        let state = self.record(ServiceCall::ListByStatus(status))?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }

    async fn list_overdue(&self) -> TaskServiceResult<Vec<Task>> {
        let now = self.clock.utc();
        let state = self.record(ServiceCall::ListOverdue)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.is_overdue(now))
            .cloned()
            .collect())
    }
}
