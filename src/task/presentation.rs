//! Display text for statuses, dates and user notices.

use crate::task::domain::{Status, TaskId, parse_timestamp};
use std::fmt;

/// Returns the human-readable label of a status.
#[must_use]
pub const fn status_label(status: Status) -> &'static str {
    match status {
        Status::New => "New",
        Status::Pending => "Pending",
        Status::InProgress => "In Progress",
        Status::Completed => "Completed",
        Status::Approved => "Approved",
        Status::Cancelled => "Cancelled",
    }
}

/// Returns the style class used to colour a status badge.
#[must_use]
pub const fn status_class(status: Status) -> &'static str {
    match status {
        Status::New => "status-new",
        Status::Pending => "status-pending",
        Status::InProgress => "status-in-progress",
        Status::Completed => "status-completed",
        Status::Approved => "status-approved",
        Status::Cancelled => "status-cancelled",
    }
}

/// Formats a raw timestamp as `YYYY-MM-DD`, or an empty string when it does
/// not parse.
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Formats a raw timestamp as `YYYY-MM-DD HH:MM` in UTC, or an empty string
/// when it does not parse.
#[must_use]
pub fn format_date_time(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Feedback shown after a task operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A task was created.
    Created,
    /// A task was edited.
    Updated,
    /// A task was deleted.
    Deleted(TaskId),
    /// A task moved to a new status.
    StatusUpdated(Status),
    /// The task list could not be loaded.
    LoadFailed,
    /// Creating a task failed.
    CreateFailed(String),
    /// Editing a task failed.
    UpdateFailed(String),
    /// Deleting a task failed.
    DeleteFailed(String),
    /// Changing a status failed.
    StatusUpdateFailed(String),
}

impl Notice {
    /// Returns whether the notice reports a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::LoadFailed
                | Self::CreateFailed(_)
                | Self::UpdateFailed(_)
                | Self::DeleteFailed(_)
                | Self::StatusUpdateFailed(_)
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("Task created successfully"),
            Self::Updated => f.write_str("Task updated successfully"),
            Self::Deleted(id) => write!(f, "Task {id} deleted successfully"),
            Self::StatusUpdated(status) => {
                write!(f, "Task status updated to {}", status_label(*status))
            }
            Self::LoadFailed => f.write_str("Failed to load tasks"),
            Self::CreateFailed(reason) => write!(f, "Failed to create task: {reason}"),
            Self::UpdateFailed(reason) => write!(f, "Failed to update task: {reason}"),
            Self::DeleteFailed(reason) => write!(f, "Failed to delete task: {reason}"),
            Self::StatusUpdateFailed(reason) => write!(f, "Failed to update status: {reason}"),
        }
    }
}
