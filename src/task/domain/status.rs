//! Task status enumeration, lifecycle table and the status catalogue.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task lifecycle status, ordered by typical lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Task has been recorded but not triaged.
    New,
    /// Task is waiting to be picked up.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Work is finished and awaits approval.
    Completed,
    /// Completed work has been approved.
    Approved,
    /// Task has been abandoned.
    Cancelled,
}

impl Status {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Approved,
        Self::Cancelled,
    ];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Approved => "APPROVED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns the statuses reachable from this one in a single step.
    #[must_use]
    pub const fn allowed_transitions(self) -> &'static [Self] {
        match self {
            Self::New => &[Self::Pending, Self::InProgress, Self::Cancelled],
            Self::Pending => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::Completed, Self::Cancelled],
            Self::Completed => &[Self::Approved],
            Self::Approved | Self::Cancelled => &[],
        }
    }

    /// Returns whether a change to `target` is permitted.
    ///
    /// Staying on the current status is always permitted.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self == target || self.allowed_transitions().contains(&target)
    }

    /// Returns whether the status has no outgoing transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Cancelled)
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "NEW" => Ok(Self::New),
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "APPROVED" => Ok(Self::Approved),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status enumeration offered to callers.
///
/// Starts from the built-in list and may be replaced from the backend's
/// status endpoint. Built on demand by
/// [`TaskLifecycleService::load_statuses`](crate::task::services::TaskLifecycleService::load_statuses)
/// rather than held as shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCatalog {
    statuses: Vec<Status>,
}

impl StatusCatalog {
    /// Builds a catalogue from backend status names.
    ///
    /// Unknown names are dropped and duplicates collapse onto their first
    /// position. An empty result falls back to the built-in list.
    #[must_use]
    pub fn from_remote<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut statuses = Vec::new();
        for name in names {
            match Status::try_from(name.as_ref()) {
                Ok(status) if !statuses.contains(&status) => statuses.push(status),
                Ok(_) => {}
                Err(err) => tracing::warn!(%err, "ignoring status reported by backend"),
            }
        }

        if statuses.is_empty() {
            return Self::default();
        }
        Self { statuses }
    }

    /// Returns the statuses in display order.
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Returns whether the catalogue offers `status`.
    #[must_use]
    pub fn contains(&self, status: Status) -> bool {
        self.statuses.contains(&status)
    }

    /// Returns the number of offered statuses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Returns whether the catalogue is empty. Never true for catalogues
    /// built through this API.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self {
            statuses: Status::ALL.to_vec(),
        }
    }
}
