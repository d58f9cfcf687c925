//! Client-side search predicates.

use crate::task::domain::{DueDateRange, SearchQuery, Task, date_prefix};
use chrono::{DateTime, Duration, Utc};

/// Length of the `this_week` window in days.
const WEEK_DAYS: i64 = 7;

/// Returns whether `task` satisfies every populated key of `query`.
///
/// Title matches are case-insensitive substrings, status matches are exact,
/// and the due date is compared against the date prefix of the raw
/// timestamp.
#[must_use]
pub fn matches_query(task: &Task, query: &SearchQuery) -> bool {
    if let Some(title) = &query.title
        && !task.title().to_lowercase().contains(&title.to_lowercase())
    {
        return false;
    }

    if let Some(status) = query.status
        && task.status() != status
    {
        return false;
    }

    if let Some(due_date) = query.due_date {
        let wanted = due_date.format("%Y-%m-%d").to_string();
        if task.due_date().and_then(date_prefix) != Some(wanted.as_str()) {
            return false;
        }
    }

    true
}

/// Keeps the tasks that satisfy `query`.
#[must_use]
pub fn apply_query(tasks: Vec<Task>, query: &SearchQuery) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| matches_query(task, query))
        .collect()
}

/// Returns whether `task` falls in the due-date bucket at `now`.
///
/// Ranges evaluated by the server always match. Tasks without a parseable due
/// date never fall in a client-side bucket.
#[must_use]
pub fn matches_due_date_range(task: &Task, range: DueDateRange, now: DateTime<Utc>) -> bool {
    if !range.is_client_side() {
        return true;
    }

    let Some(due) = task.due_at() else {
        return false;
    };

    match range {
        DueDateRange::Today => due.date_naive() == now.date_naive(),
        DueDateRange::ThisWeek => due >= now && due <= now + Duration::days(WEEK_DAYS),
        DueDateRange::Overdue => task.is_overdue(now),
        DueDateRange::Any | DueDateRange::Specific => true,
    }
}

/// Keeps the tasks in the due-date bucket at `now`.
#[must_use]
pub fn apply_due_date_range(tasks: Vec<Task>, range: DueDateRange, now: DateTime<Utc>) -> Vec<Task> {
    if !range.is_client_side() {
        return tasks;
    }
    tasks
        .into_iter()
        .filter(|task| matches_due_date_range(task, range, now))
        .collect()
}

/// Renders the result count line of the search page.
///
/// # Examples
///
/// ```
/// use taskdesk::task::search::result_summary;
///
/// assert_eq!(result_summary(0), "0 results found");
/// assert_eq!(result_summary(1), "1 result found");
/// ```
#[must_use]
pub fn result_summary(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} result{suffix} found")
}
