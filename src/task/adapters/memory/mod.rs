//! In-memory adapters for task ports.

mod task;

pub use task::{InMemoryTaskService, ServiceCall};
