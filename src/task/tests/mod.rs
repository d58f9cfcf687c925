//! Unit tests for the task module.
//!
//! Tests are organised by concern: domain parsing, validation, the
//! transition table, list normalization, search, the lifecycle service, and
//! the list-view helpers.
