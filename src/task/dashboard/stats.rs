//! Summary counts shown above the task list.

use crate::task::domain::{Status, Task};
use chrono::{DateTime, Utc};

/// Counts of tasks by headline status, plus overdue tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Every task.
    pub total: usize,
    /// Tasks in `NEW`.
    pub new: usize,
    /// Tasks in `IN_PROGRESS`.
    pub in_progress: usize,
    /// Tasks in `COMPLETED`.
    pub completed: usize,
    /// Tasks past due and not completed at the reference time.
    pub overdue: usize,
}

impl TaskStats {
    /// Tallies `tasks` as of `now`.
    #[must_use]
    pub fn collect<'a>(tasks: impl IntoIterator<Item = &'a Task>, now: DateTime<Utc>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status() {
                Status::New => stats.new += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Completed => stats.completed += 1,
                Status::Pending | Status::Approved | Status::Cancelled => {}
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
            stats
        })
    }
}
