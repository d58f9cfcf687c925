//! List response normalization.

use crate::task::domain::Task;
use serde_json::Value;

/// Object keys that may wrap a task array, in precedence order.
pub const LIST_ENVELOPE_KEYS: [&str; 3] = ["content", "items", "data"];

/// Extracts the tasks from a list response.
///
/// Accepts a bare array or an object whose `content`, `items` or `data` key
/// holds an array, checked in that order. Any other shape yields no tasks.
/// Entries that do not decode as tasks are skipped.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use taskdesk::task::search::normalize_list;
///
/// let wrapped = json!({ "items": [{ "id": 1, "title": "Call supplier", "status": "NEW" }] });
/// assert_eq!(normalize_list(wrapped).len(), 1);
/// assert!(normalize_list(json!({ "unexpected": true })).is_empty());
/// ```
#[must_use]
pub fn normalize_list(raw: Value) -> Vec<Task> {
    let entries = match raw {
        Value::Array(entries) => entries,
        Value::Object(mut envelope) => LIST_ENVELOPE_KEYS
            .iter()
            .find_map(|key| match envelope.remove(*key) {
                Some(Value::Array(entries)) => Some(entries),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            serde_json::from_value::<Task>(entry)
                .inspect_err(|err| tracing::warn!(%err, "skipping list entry that is not a task"))
                .ok()
        })
        .collect()
}
