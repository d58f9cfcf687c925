//! Step definitions for task search scenarios.

pub mod given;
pub mod when;
