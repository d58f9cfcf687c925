//! List-view helpers: filtering, sorting, pagination and summary counts.
//!
//! These operate on tasks already fetched from the backend and never issue
//! requests of their own.

mod pagination;
mod query;
mod sort;
mod stats;

pub use pagination::{PAGE_WINDOW, Page, page_window, paginate};
pub use query::{StatusFilter, TaskListQuery};
pub use sort::{SortDirection, SortField, SortSpec};
pub use stats::TaskStats;
