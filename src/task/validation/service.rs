//! Validation service implementation.
//!
//! Provides the default implementation of the `TaskValidator` port,
//! combining the individual rules into a single pass over the draft.

use super::{TaskField, ValidationErrors, rules};
use crate::task::{
    domain::TaskDraft,
    ports::validator::{TaskValidator, ValidationConfig},
};
use chrono::{DateTime, Utc};

/// Default implementation of the task validator.
///
/// Every field is checked independently so that all failures are reported
/// together.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use taskdesk::task::domain::{Status, TaskDraft};
/// use taskdesk::task::ports::validator::TaskValidator;
/// use taskdesk::task::validation::DefaultTaskValidator;
///
/// let now = Utc::now();
/// let draft = TaskDraft::new()
///     .with_title("Prepare quarterly report")
///     .with_status(Status::New)
///     .with_due_at(now + Duration::days(2));
///
/// let validator = DefaultTaskValidator::new();
/// assert!(validator.validate(&draft, now).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskValidator {
    config: ValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a validator with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the active limits.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, draft: &TaskDraft, now: DateTime<Utc>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let checks = [
            (TaskField::Title, rules::validate_title(draft.title(), &self.config)),
            (TaskField::Status, rules::validate_status(draft.status())),
            (TaskField::DueDate, rules::validate_due_date(draft.due_date(), now)),
            (
                TaskField::Description,
                rules::validate_description(draft.description(), &self.config),
            ),
        ];

        for (field, outcome) in checks {
            if let Some(error) = outcome {
                errors.insert(field, error);
            }
        }

        errors
    }
}
