//! Task record, editable draft, and due-date parsing.

use super::{Status, TaskId};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Naive timestamp layouts accepted for due dates, interpreted as UTC.
const NAIVE_TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Offset timestamp layout without seconds, which RFC 3339 parsing rejects.
const OFFSET_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Number of characters in a `YYYY-MM-DD` date prefix.
pub const DATE_PREFIX_LEN: usize = 10;

/// Parses an ISO-8601 timestamp as sent by the backend or typed by a user.
///
/// Accepts RFC 3339 timestamps with an offset (seconds optional), naive
/// date-times taken as UTC, and bare calendar dates at midnight UTC. Returns
/// `None` for anything else.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, OFFSET_MINUTES_FORMAT))
    {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Renders `at` the way due dates are submitted to the backend, e.g.
/// `2099-01-01T00:00:00.000Z`.
#[must_use]
pub fn canonical_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns the `YYYY-MM-DD` prefix of a raw timestamp, if it is long enough.
#[must_use]
pub fn date_prefix(raw: &str) -> Option<&str> {
    raw.get(..DATE_PREFIX_LEN)
}

/// Task record as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tasknum: Option<i64>,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: Status,
    #[serde(default, alias = "due_date", alias = "duedate")]
    due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

impl Task {
    /// Creates a task record with the mandatory fields.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, status: Status) -> Self {
        Self {
            id,
            tasknum: None,
            title: title.into(),
            description: None,
            status,
            due_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the human-facing task number.
    #[must_use]
    pub const fn with_tasknum(mut self, tasknum: i64) -> Self {
        self.tasknum = Some(tasknum);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw due-date timestamp.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the due date from a UTC instant.
    #[must_use]
    pub fn with_due_at(self, due_at: DateTime<Utc>) -> Self {
        self.with_due_date(canonical_timestamp(due_at))
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Overwrites the editable fields present in `draft`.
    #[must_use]
    pub fn merged_with(mut self, draft: &TaskDraft) -> Self {
        if let Some(title) = draft.title() {
            title.clone_into(&mut self.title);
        }
        if let Some(description) = draft.description() {
            self.description = Some(description.to_owned());
        }
        if let Some(status) = draft.status() {
            self.status = status;
        }
        if let Some(due_date) = draft.due_date() {
            self.due_date = Some(due_date.to_owned());
        }
        self
    }

    /// Returns the backend identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the human-facing task number, if assigned.
    #[must_use]
    pub const fn tasknum(&self) -> Option<i64> {
        self.tasknum
    }

    /// Returns the number used to order tasks: the task number, else the id.
    #[must_use]
    pub fn sort_number(&self) -> i64 {
        self.tasknum.unwrap_or_else(|| self.id.value())
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the due date exactly as received.
    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    /// Returns the parsed due date, if present and well formed.
    #[must_use]
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_date.as_deref().and_then(parse_timestamp)
    }

    /// Returns the creation timestamp as received.
    #[must_use]
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// Returns the last-update timestamp as received.
    #[must_use]
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// Returns whether the task is past due and not completed at `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != Status::Completed && self.due_at().is_some_and(|due| due < now)
    }
}

/// Editable task fields submitted by the create and edit forms.
///
/// Every field is optional so that incomplete input can be validated and
/// reported field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the initial draft of the create form, preset to `NEW`.
    #[must_use]
    pub fn new_form() -> Self {
        Self::new().with_status(Status::New)
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the raw due-date input.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the due date from a UTC instant.
    #[must_use]
    pub fn with_due_at(self, due_at: DateTime<Utc>) -> Self {
        self.with_due_date(canonical_timestamp(due_at))
    }

    /// Rewrites a parseable due date into its canonical submitted form.
    /// Unparseable or missing input is left untouched.
    #[must_use]
    pub fn with_canonical_due_date(mut self) -> Self {
        if let Some(due_at) = self.due_date.as_deref().and_then(parse_timestamp) {
            self.due_date = Some(canonical_timestamp(due_at));
        }
        self
    }

    /// Returns the title input.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description input.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the selected status.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns the raw due-date input.
    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: Some(task.title.clone()),
            description: task.description.clone(),
            status: Some(task.status),
            due_date: task.due_date.clone(),
        }
    }
}
