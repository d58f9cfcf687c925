//! HTTP adapter for the task backend REST API.

mod client;
mod error;

pub use client::{HttpClientConfig, HttpSetupError, HttpTaskService};
