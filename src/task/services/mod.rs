//! Application services for task management.

mod lifecycle;
mod search;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use search::{SEARCH_FAILED_MESSAGE, SearchError, SearchOutcome, SearchSource, TaskSearchService};
