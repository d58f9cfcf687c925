//! Service layer for task creation, editing, status changes and deletion.

use crate::task::{
    domain::{Status, StatusCatalog, Task, TaskDomainError, TaskDraft, TaskId, TransitionPolicy},
    ports::{TaskService, TaskServiceError, TaskValidator},
    validation::{DefaultTaskValidator, FormKind, ValidationErrors},
};
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskLifecycleError {
    /// The draft failed validation; nothing was sent.
    #[error("task validation failed: {errors}")]
    Validation {
        /// Form that submitted the draft.
        form: FormKind,
        /// Failing fields.
        errors: ValidationErrors,
    },
    /// A domain rule rejected the operation; nothing was sent.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The backend call failed.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

impl TaskLifecycleError {
    /// Returns the per-field messages of a validation failure, worded for
    /// the submitting form. Empty for other errors.
    #[must_use]
    pub fn field_messages(&self) -> BTreeMap<&'static str, String> {
        match self {
            Self::Validation { form, errors } => errors.messages(*form),
            Self::Domain(_) | Self::Service(_) => BTreeMap::new(),
        }
    }

    /// Returns the message suitable for showing to a user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { form, errors } => errors
                .iter()
                .map(|(_, error)| error.message(*form))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Domain(err) => err.to_string(),
            Self::Service(err) => err.user_message(),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Gates create and edit submissions on validation and status changes on the
/// transition policy before calling the backend.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: TaskService,
    C: Clock + Send + Sync,
{
    service: Arc<S>,
    clock: Arc<C>,
    validator: DefaultTaskValidator,
    policy: TransitionPolicy,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskService,
    C: Clock + Send + Sync,
{
    /// Creates a lifecycle service with default validation limits and an
    /// enforcing transition policy.
    #[must_use]
    pub fn new(service: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            service,
            clock,
            validator: DefaultTaskValidator::new(),
            policy: TransitionPolicy::default(),
        }
    }

    /// Replaces the validator.
    #[must_use]
    pub const fn with_validator(mut self, validator: DefaultTaskValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Replaces the transition policy.
    #[must_use]
    pub const fn with_transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the transition policy in force.
    #[must_use]
    pub const fn transition_policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Validates `draft` against the current time.
    #[must_use]
    pub fn validate(&self, draft: &TaskDraft) -> ValidationErrors {
        self.validator.validate(draft, self.clock.utc())
    }

    /// Lists every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Service`] when the backend call fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.service.list_tasks().await?)
    }

    /// Fetches a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Service`] when the backend call fails,
    /// including [`TaskServiceError::NotFound`] for an unknown id.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        Ok(self.service.get_task(id).await?)
    }

    /// Validates and creates a task. The due date is submitted as a
    /// canonical UTC timestamp whatever layout it was entered in.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] without contacting the
    /// backend when the draft is invalid, or
    /// [`TaskLifecycleError::Service`] when the backend rejects it.
    pub async fn create(&self, draft: &TaskDraft) -> TaskLifecycleResult<Task> {
        let draft = self.ensure_valid(draft, FormKind::Create)?;
        let created = self.service.create_task(&draft).await?;
        tracing::info!(task_id = %created.id(), "task created");
        Ok(created)
    }

    /// Validates and saves edits to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] without contacting the
    /// backend when the draft is invalid, or
    /// [`TaskLifecycleError::Service`] when the backend rejects it.
    pub async fn update(&self, id: TaskId, draft: &TaskDraft) -> TaskLifecycleResult<Task> {
        let draft = self.ensure_valid(draft, FormKind::Edit)?;
        let updated = self.service.update_task(id, &draft).await?;
        tracing::info!(task_id = %id, "task updated");
        Ok(updated)
    }

    /// Changes the status of `task`.
    ///
    /// Full-form validation is skipped, so a past due date does not block a
    /// status change. Keeping the current status is a no-op and issues no
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the policy enforces the
    /// transition table and the change is outside it, or
    /// [`TaskLifecycleError::Service`] when the backend call fails.
    pub async fn change_status(&self, task: &Task, status: Status) -> TaskLifecycleResult<Task> {
        if task.status() == status {
            tracing::debug!(task_id = %task.id(), %status, "status unchanged, skipping update");
            return Ok(task.clone());
        }

        self.policy.authorise(task.id(), task.status(), status)?;
        let updated = self.service.update_status(task.id(), status).await?;
        tracing::info!(task_id = %task.id(), from = %task.status(), to = %status, "task status changed");
        Ok(updated)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Service`] when the backend call fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.service.delete_task(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Lists tasks with exactly the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Service`] when the backend call fails.
    pub async fn list_by_status(&self, status: Status) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.service.list_by_status(status).await?)
    }

    /// Lists tasks the backend considers overdue.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Service`] when the backend call fails.
    pub async fn list_overdue(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.service.list_overdue().await?)
    }

    /// Loads the status catalogue from the backend.
    ///
    /// Never fails: when the backend cannot be reached or reports nothing
    /// usable, the built-in catalogue is returned.
    pub async fn load_statuses(&self) -> StatusCatalog {
        self.service.list_statuses().await.map_or_else(
            |err| {
                tracing::warn!(%err, "could not load statuses, using built-in list");
                StatusCatalog::default()
            },
            StatusCatalog::from_remote,
        )
    }

    /// Returns the draft as it should be submitted, with its due date in
    /// canonical form.
    fn ensure_valid(&self, draft: &TaskDraft, form: FormKind) -> TaskLifecycleResult<TaskDraft> {
        self.validate(draft)
            .into_result()
            .map_err(|errors| TaskLifecycleError::Validation { form, errors })?;
        Ok(draft.clone().with_canonical_due_date())
    }
}
