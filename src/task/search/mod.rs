//! Response normalization and client-side search predicates.
//!
//! The backend has returned task lists in several envelopes over time, and
//! its search endpoint cannot evaluate relative due-date buckets. This module
//! reconciles both: [`normalize_list`] accepts every known envelope, and the
//! predicates re-apply search filters locally.

mod normalize;
mod predicates;

pub use normalize::{LIST_ENVELOPE_KEYS, normalize_list};
pub use predicates::{
    apply_due_date_range, apply_query, matches_due_date_range, matches_query, result_summary,
};
