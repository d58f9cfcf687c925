//! Taskdesk: a client library and command-line front end for a REST task
//! backend.
//!
//! The crate validates task submissions before they reach the network,
//! enforces the status lifecycle, and falls back to client-side filtering
//! when server search is unavailable.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task model, validation, search and backend access
//! - [`config`]: Environment-driven runtime configuration
//! - [`telemetry`]: Tracing subscriber installation

pub mod config;
pub mod task;
pub mod telemetry;
