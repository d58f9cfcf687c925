//! Task tracking against a remote task backend.
//!
//! Tasks live on a REST backend; this module validates what is sent to it,
//! enforces the status lifecycle, and makes search resilient to backend
//! failures. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! Pure helpers used by the services and front ends sit beside them:
//! [`validation`] for form rules, [`search`] for list normalization and
//! client-side filtering, [`dashboard`] for list views, and
//! [`presentation`] for display text.

pub mod adapters;
pub mod dashboard;
pub mod domain;
pub mod ports;
pub mod presentation;
pub mod search;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
