//! Validator port for task drafts.

use crate::task::{
    domain::TaskDraft,
    validation::{FieldError, TaskField, ValidationErrors},
};
use chrono::{DateTime, Utc};

/// Port for task draft validation.
///
/// Implementations must evaluate every field independently and report all
/// failures at once rather than stopping at the first. Validation is a pure
/// function of the draft and the supplied instant.
pub trait TaskValidator: Send + Sync {
    /// Validates every field of `draft` against `now`.
    fn validate(&self, draft: &TaskDraft, now: DateTime<Utc>) -> ValidationErrors;

    /// Validates a single field of `draft`.
    fn validate_field(
        &self,
        field: TaskField,
        draft: &TaskDraft,
        now: DateTime<Utc>,
    ) -> Option<FieldError> {
        self.validate(draft, now).get(field).cloned()
    }
}

/// Limits applied by the validation rules.
///
/// # Examples
///
/// ```
/// use taskdesk::task::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.title_max_length, 200);
/// assert_eq!(config.description_max_length, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Minimum title length in characters, measured after trimming.
    pub title_min_length: usize,
    /// Maximum title length in characters.
    pub title_max_length: usize,
    /// Maximum description length in characters.
    pub description_max_length: usize,
}

impl ValidationConfig {
    /// Default minimum title length.
    pub const DEFAULT_TITLE_MIN_LENGTH: usize = 3;
    /// Default maximum title length.
    pub const DEFAULT_TITLE_MAX_LENGTH: usize = 200;
    /// Default maximum description length.
    pub const DEFAULT_DESCRIPTION_MAX_LENGTH: usize = 500;

    /// Returns the configuration with a different title maximum.
    #[must_use]
    pub const fn with_title_max_length(mut self, max: usize) -> Self {
        self.title_max_length = max;
        self
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            title_min_length: Self::DEFAULT_TITLE_MIN_LENGTH,
            title_max_length: Self::DEFAULT_TITLE_MAX_LENGTH,
            description_max_length: Self::DEFAULT_DESCRIPTION_MAX_LENGTH,
        }
    }
}
