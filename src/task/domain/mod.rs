//! Domain model for task management.
//!
//! The task domain holds the task record, the editable draft, the status
//! lifecycle and its transition policy, and the search filters. It has no
//! knowledge of HTTP or of how tasks are stored.

mod error;
mod filters;
mod ids;
mod status;
mod task;
mod transition;

pub use error::{ParseDueDateRangeError, ParseStatusError, TaskDomainError};
pub use filters::{DueDateRange, SearchFilters, SearchQuery, parse_search_date};
pub use ids::TaskId;
pub use status::{Status, StatusCatalog};
pub use task::{
    DATE_PREFIX_LEN, Task, TaskDraft, canonical_timestamp, date_prefix, parse_timestamp,
};
pub use transition::{TransitionCheck, TransitionEnforcement, TransitionPolicy};
