//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod service;
pub mod validator;

pub use service::{NETWORK_ERROR_MESSAGE, TaskService, TaskServiceError, TaskServiceResult};
pub use validator::{TaskValidator, ValidationConfig};
