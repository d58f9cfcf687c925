//! Status and free-text filtering of the task list.

use crate::task::domain::{Status, Task};

/// Status restriction of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every status.
    #[default]
    All,
    /// Exactly one status.
    Only(Status),
}

impl StatusFilter {
    /// Returns whether `status` passes the filter.
    #[must_use]
    pub fn admits(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        Self::Only(status)
    }
}

impl From<Option<Status>> for StatusFilter {
    fn from(status: Option<Status>) -> Self {
        status.map_or(Self::All, Self::Only)
    }
}

/// Filters applied to the task list view.
///
/// The search term is trimmed and matched case-insensitively against the
/// title or the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListQuery {
    status: StatusFilter,
    search: String,
}

impl TaskListQuery {
    /// Creates a query that keeps every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the list by status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<StatusFilter>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Returns the status restriction.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the search term as entered.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns whether the query keeps every task.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        matches!(self.status, StatusFilter::All) && self.search.trim().is_empty()
    }

    /// Returns whether `task` passes both filters.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !self.status.admits(task.status()) {
            return false;
        }

        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        task.title().to_lowercase().contains(&term)
            || task
                .description()
                .is_some_and(|description| description.to_lowercase().contains(&term))
    }

    /// Keeps the tasks that pass both filters, preserving order.
    #[must_use]
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        if self.is_unfiltered() {
            return tasks;
        }
        tasks.into_iter().filter(|task| self.matches(task)).collect()
    }
}
