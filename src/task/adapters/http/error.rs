//! Mapping of HTTP failures onto task service errors.

use crate::task::{domain::TaskId, ports::TaskServiceError};
use reqwest::StatusCode;
use serde_json::Value;

/// Converts a transport failure into a service error.
///
/// Failures to build the request are request errors; everything else means
/// no response arrived.
pub(crate) fn transport_error(err: &reqwest::Error) -> TaskServiceError {
    if err.is_builder() {
        TaskServiceError::Request(err.to_string())
    } else {
        TaskServiceError::Network(err.to_string())
    }
}

/// Converts an error response into a service error.
///
/// A 404 on an id-scoped endpoint becomes [`TaskServiceError::NotFound`].
pub(crate) fn status_error(status: StatusCode, body: &str, scope: Option<TaskId>) -> TaskServiceError {
    if status == StatusCode::NOT_FOUND
        && let Some(id) = scope
    {
        return TaskServiceError::NotFound(id);
    }
    TaskServiceError::server(status.as_u16(), extract_message(body))
}

/// Extracts a user-facing message from an error body.
///
/// Prefers a JSON object's `message` field, then a JSON string, then any
/// non-JSON text. Structured bodies without a message yield `None`.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(fields)) => fields
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.trim().is_empty())
            .map(str::to_owned),
        Ok(Value::String(text)) if !text.trim().is_empty() => Some(text),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_owned()),
    }
}
