//! Search filters and the query subset sent to the backend.

use super::{ParseDueDateRangeError, Status, TaskDomainError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Due-date bucket selected on the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDateRange {
    /// No due-date restriction.
    #[default]
    Any,
    /// Due on the current calendar day.
    Today,
    /// Due within the next seven days.
    ThisWeek,
    /// Past due and not completed.
    Overdue,
    /// Due on the calendar day given in the filters.
    Specific,
}

impl DueDateRange {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::Overdue => "overdue",
            Self::Specific => "specific",
        }
    }

    /// Returns whether the bucket is evaluated on the client after retrieval.
    #[must_use]
    pub const fn is_client_side(self) -> bool {
        matches!(self, Self::Today | Self::ThisWeek | Self::Overdue)
    }
}

impl FromStr for DueDateRange {
    type Err = ParseDueDateRangeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "any" | "" => Ok(Self::Any),
            "today" => Ok(Self::Today),
            "this_week" | "this-week" => Ok(Self::ThisWeek),
            "overdue" => Ok(Self::Overdue),
            "specific" => Ok(Self::Specific),
            _ => Err(ParseDueDateRangeError(value.to_owned())),
        }
    }
}

impl fmt::Display for DueDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a `YYYY-MM-DD` search date.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidSearchDate`] for any other layout.
pub fn parse_search_date(value: &str) -> Result<NaiveDate, TaskDomainError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| TaskDomainError::InvalidSearchDate(value.to_owned()))
}

/// Filters entered on the search page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    title: String,
    status: Option<Status>,
    due_date: Option<NaiveDate>,
    due_date_range: DueDateRange,
}

impl SearchFilters {
    /// Creates empty filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title fragment.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the exact status to match.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Selects a specific due date, switching the range to
    /// [`DueDateRange::Specific`].
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self.due_date_range = DueDateRange::Specific;
        self
    }

    /// Selects a due-date bucket. Any bucket other than
    /// [`DueDateRange::Specific`] clears the specific date.
    #[must_use]
    pub const fn with_due_date_range(mut self, range: DueDateRange) -> Self {
        if !matches!(range, DueDateRange::Specific) {
            self.due_date = None;
        }
        self.due_date_range = range;
        self
    }

    /// Returns the title fragment as entered.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the status filter.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns the specific due date, if selected.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the due-date bucket.
    #[must_use]
    pub const fn due_date_range(&self) -> DueDateRange {
        self.due_date_range
    }

    /// Returns the subset of filters the backend understands.
    #[must_use]
    pub fn query(&self) -> SearchQuery {
        let title = self.title.trim();
        SearchQuery {
            title: (!title.is_empty()).then(|| title.to_owned()),
            status: self.status,
            due_date: match self.due_date_range {
                DueDateRange::Specific => self.due_date,
                _ => None,
            },
        }
    }
}

/// Server-side search parameters. Only populated keys are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Title fragment, trimmed and non-empty.
    pub title: Option<String>,
    /// Exact status.
    pub status: Option<Status>,
    /// Calendar day of the due date.
    pub due_date: Option<NaiveDate>,
}

impl SearchQuery {
    /// Returns whether no parameter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none() && self.due_date.is_none()
    }

    /// Returns the query-string pairs in `title`, `status`, `dueDate` order.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        if let Some(title) = &self.title {
            params.push(("title", title.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_owned()));
        }
        if let Some(due_date) = self.due_date {
            params.push(("dueDate", due_date.format("%Y-%m-%d").to_string()));
        }
        params
    }
}
