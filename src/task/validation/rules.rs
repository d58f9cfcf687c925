//! Individual validation rule implementations.
//!
//! Each rule inspects one field and returns the failure for that field, if
//! any. Rules never depend on each other.

use super::FieldError;
use crate::task::{
    domain::{Status, parse_timestamp},
    ports::validator::ValidationConfig,
};
use chrono::{DateTime, Utc};

/// Validates the title.
///
/// A missing or blank title is reported before length checks. The maximum
/// applies to the raw input; the minimum applies to the trimmed input.
///
/// # Examples
///
/// ```
/// use taskdesk::task::ports::validator::ValidationConfig;
/// use taskdesk::task::validation::{FieldError, rules::validate_title};
///
/// let config = ValidationConfig::default();
/// assert_eq!(validate_title(Some("  "), &config), Some(FieldError::TitleRequired));
/// assert_eq!(
///     validate_title(Some("ab"), &config),
///     Some(FieldError::TitleTooShort { min: 3 })
/// );
/// assert_eq!(validate_title(Some("Write report"), &config), None);
/// ```
#[must_use]
pub fn validate_title(title: Option<&str>, config: &ValidationConfig) -> Option<FieldError> {
    let Some(raw) = title.filter(|value| !value.trim().is_empty()) else {
        return Some(FieldError::TitleRequired);
    };

    if raw.chars().count() > config.title_max_length {
        return Some(FieldError::TitleTooLong {
            max: config.title_max_length,
        });
    }

    if raw.trim().chars().count() < config.title_min_length {
        return Some(FieldError::TitleTooShort {
            min: config.title_min_length,
        });
    }

    None
}

/// Validates that a status was selected.
#[must_use]
pub const fn validate_status(status: Option<Status>) -> Option<FieldError> {
    if status.is_some() {
        None
    } else {
        Some(FieldError::StatusRequired)
    }
}

/// Validates the due date against `now`.
///
/// A due date equal to `now` is accepted; only earlier instants fail.
#[must_use]
pub fn validate_due_date(due_date: Option<&str>, now: DateTime<Utc>) -> Option<FieldError> {
    let Some(raw) = due_date.filter(|value| !value.trim().is_empty()) else {
        return Some(FieldError::DueDateRequired);
    };

    match parse_timestamp(raw) {
        None => Some(FieldError::InvalidDueDate),
        Some(due) if due < now => Some(FieldError::DueDateNotFuture),
        Some(_) => None,
    }
}

/// Validates the optional description length.
#[must_use]
pub fn validate_description(
    description: Option<&str>,
    config: &ValidationConfig,
) -> Option<FieldError> {
    description
        .filter(|value| value.chars().count() > config.description_max_length)
        .map(|_| FieldError::DescriptionTooLong {
            max: config.description_max_length,
        })
}

/// Truncates description input to `max` characters, as the form does while
/// the user types.
#[must_use]
pub fn truncate_description(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// Removes ASCII control characters and surrounding whitespace.
///
/// # Examples
///
/// ```
/// use taskdesk::task::validation::sanitize_input;
///
/// assert_eq!(sanitize_input("  Fix\u{0007} login\n"), "Fix login");
/// ```
#[must_use]
pub fn sanitize_input(value: &str) -> String {
    let stripped: String = value.chars().filter(|ch| !ch.is_ascii_control()).collect();
    stripped.trim().to_owned()
}
