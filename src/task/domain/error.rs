//! Error types for task domain parsing and lifecycle rules.

use super::{Status, TaskId};
use thiserror::Error;

/// Errors raised by task domain rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested status change is not in the transition table.
    #[error(
        "Cannot transition from {from} to {to}. Allowed transitions: {}",
        describe_allowed(.allowed)
    )]
    InvalidStatusTransition {
        /// Task whose status change was rejected.
        task_id: TaskId,
        /// Current status.
        from: Status,
        /// Requested status.
        to: Status,
        /// Statuses reachable from `from`.
        allowed: Vec<Status>,
    },

    /// A search date was not a `YYYY-MM-DD` calendar date.
    #[error("invalid search date '{0}', expected YYYY-MM-DD")]
    InvalidSearchDate(String),
}

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing a due-date range bucket.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown due date range: {0}")]
pub struct ParseDueDateRangeError(pub String);

fn describe_allowed(allowed: &[Status]) -> String {
    if allowed.is_empty() {
        return "none (terminal state)".to_owned();
    }
    allowed
        .iter()
        .map(|status| status.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
