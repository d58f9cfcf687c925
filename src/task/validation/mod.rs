//! Task draft validation.
//!
//! Individual rules live in [`rules`]; [`DefaultTaskValidator`] combines them
//! into the [`TaskValidator`](crate::task::ports::TaskValidator) port.

mod error;
pub mod rules;
mod service;

pub use error::{FieldError, FormKind, TaskField, ValidationErrors};
pub use rules::{sanitize_input, truncate_description};
pub use service::DefaultTaskValidator;
