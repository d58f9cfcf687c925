//! Status transition policy.

use super::{Status, TaskDomainError, TaskId};

/// Outcome of checking a status change against the transition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionCheck {
    /// Whether the change is permitted.
    pub valid: bool,
    /// Statuses reachable from the current status.
    pub allowed: Vec<Status>,
}

/// How rejected transitions are treated before a status update is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionEnforcement {
    /// Reject invalid transitions before any request is issued.
    #[default]
    Enforce,
    /// Log invalid transitions and submit them anyway.
    Advisory,
}

impl TransitionEnforcement {
    /// Parses `enforce` or `advisory`, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "enforce" => Some(Self::Enforce),
            "advisory" => Some(Self::Advisory),
            _ => None,
        }
    }
}

/// Applies the status transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionPolicy {
    enforcement: TransitionEnforcement,
}

impl TransitionPolicy {
    /// Creates a policy with the given enforcement mode.
    #[must_use]
    pub const fn new(enforcement: TransitionEnforcement) -> Self {
        Self { enforcement }
    }

    /// Returns the configured enforcement mode.
    #[must_use]
    pub const fn enforcement(&self) -> TransitionEnforcement {
        self.enforcement
    }

    /// Checks a change from `from` to `to` against the transition table.
    #[must_use]
    pub fn check(from: Status, to: Status) -> TransitionCheck {
        TransitionCheck {
            valid: from.can_transition_to(to),
            allowed: from.allowed_transitions().to_vec(),
        }
    }

    /// Decides whether a status update for `task_id` may be submitted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the change is
    /// outside the table and the policy enforces it.
    pub fn authorise(
        &self,
        task_id: TaskId,
        from: Status,
        to: Status,
    ) -> Result<TransitionCheck, TaskDomainError> {
        let check = Self::check(from, to);
        if check.valid {
            return Ok(check);
        }

        match self.enforcement {
            TransitionEnforcement::Enforce => Err(TaskDomainError::InvalidStatusTransition {
                task_id,
                from,
                to,
                allowed: check.allowed,
            }),
            TransitionEnforcement::Advisory => {
                tracing::warn!(
                    %task_id,
                    %from,
                    %to,
                    "submitting status change outside the transition table"
                );
                Ok(check)
            }
        }
    }
}
