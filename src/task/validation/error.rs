//! Field-level validation errors.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Draft field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    /// Task title.
    Title,
    /// Task status.
    Status,
    /// Task due date.
    DueDate,
    /// Task description.
    Description,
}

impl TaskField {
    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Status => "status",
            Self::DueDate => "dueDate",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form that produced a draft. Only affects message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormKind {
    /// The create-task form.
    #[default]
    Create,
    /// The edit-task form.
    Edit,
}

/// Canonical validation failure for a single field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// Title missing or blank.
    #[error("Title is required")]
    TitleRequired,
    /// Title longer than the configured maximum.
    #[error("Title must be less than {max} characters")]
    TitleTooLong {
        /// Maximum length in characters.
        max: usize,
    },
    /// Trimmed title shorter than the configured minimum.
    #[error("Title must be at least {min} characters long")]
    TitleTooShort {
        /// Minimum length in characters.
        min: usize,
    },
    /// No status selected.
    #[error("Status is required")]
    StatusRequired,
    /// Due date missing.
    #[error("Due date is required")]
    DueDateRequired,
    /// Due date does not parse as a timestamp.
    #[error("Invalid date format")]
    InvalidDueDate,
    /// Due date lies before the current time.
    #[error("Due date must be in the future")]
    DueDateNotFuture,
    /// Description longer than the configured maximum.
    #[error("Description must be less than {max} characters")]
    DescriptionTooLong {
        /// Maximum length in characters.
        max: usize,
    },
}

impl FieldError {
    /// Renders the message the given form shows for this error.
    #[must_use]
    pub fn message(&self, form: FormKind) -> String {
        match (self, form) {
            (Self::DueDateNotFuture, FormKind::Edit) => "Due date cannot be in the past".to_owned(),
            _ => self.to_string(),
        }
    }
}

/// Validation failures keyed by field. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", summarize(.0))]
pub struct ValidationErrors(BTreeMap<TaskField, FieldError>);

impl ValidationErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records the error for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: TaskField, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Returns whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the error recorded for `field`.
    #[must_use]
    pub fn get(&self, field: TaskField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Returns whether `field` failed.
    #[must_use]
    pub fn contains(&self, field: TaskField) -> bool {
        self.0.contains_key(&field)
    }

    /// Iterates over failing fields in field order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskField, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Renders the field-name to message map shown by `form`.
    #[must_use]
    pub fn messages(&self, form: FormKind) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.as_str(), error.message(form)))
            .collect()
    }

    /// Converts into `Ok(())` when empty.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn summarize(errors: &BTreeMap<TaskField, FieldError>) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("{field}: {error}"))
        .collect::<Vec<_>>()
        .join("; ")
}
