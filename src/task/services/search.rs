//! Two-tier task search.

use crate::task::{
    domain::{SearchFilters, Task},
    ports::{TaskService, TaskServiceError},
    search::{apply_due_date_range, apply_query, result_summary},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Message shown when a search cannot be answered at all.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Tier that produced a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
    /// The backend search endpoint answered.
    Server,
    /// The backend search failed and the full list was filtered locally.
    ClientFallback,
}

/// Tasks found by a search, with the tier that found them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    tasks: Vec<Task>,
    source: SearchSource,
}

impl SearchOutcome {
    /// Returns the matching tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consumes the outcome, returning the matching tasks.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Returns the tier that answered.
    #[must_use]
    pub const fn source(&self) -> SearchSource {
        self.source
    }

    /// Returns the number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the result count line, e.g. `3 results found`.
    #[must_use]
    pub fn message(&self) -> String {
        result_summary(self.tasks.len())
    }
}

/// Errors surfaced by a search.
///
/// A failing search endpoint is never reported; only the failure of the
/// fallback list fetch is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The fallback list fetch failed after the search endpoint failed.
    #[error("search fallback failed: {0}")]
    Fallback(#[source] TaskServiceError),
}

impl SearchError {
    /// Returns the message suitable for showing to a user.
    #[must_use]
    pub fn user_message(&self) -> String {
        SEARCH_FAILED_MESSAGE.to_owned()
    }
}

/// Search service combining the backend search with local filtering.
#[derive(Clone)]
pub struct TaskSearchService<S, C>
where
    S: TaskService,
    C: Clock + Send + Sync,
{
    service: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskSearchService<S, C>
where
    S: TaskService,
    C: Clock + Send + Sync,
{
    /// Creates a search service.
    #[must_use]
    pub const fn new(service: Arc<S>, clock: Arc<C>) -> Self {
        Self { service, clock }
    }

    /// Searches for tasks matching `filters`.
    ///
    /// Sends the server-understood filters to the search endpoint. If that
    /// call fails, lists every task and applies the same filters locally.
    /// Relative due-date buckets are then applied to whichever result was
    /// obtained.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Fallback`] when the search endpoint and the
    /// fallback list fetch both fail.
    pub async fn search(&self, filters: &SearchFilters) -> Result<SearchOutcome, SearchError> {
        let query = filters.query();
        let (found, source) = match self.service.search_tasks(&query).await {
            Ok(tasks) => (tasks, SearchSource::Server),
            Err(err) => {
                tracing::warn!(%err, "backend search failed, falling back to client filtering");
                let all = self
                    .service
                    .list_tasks()
                    .await
                    .map_err(SearchError::Fallback)?;
                (apply_query(all, &query), SearchSource::ClientFallback)
            }
        };

        let tasks = apply_due_date_range(found, filters.due_date_range(), self.clock.utc());
        tracing::debug!(count = tasks.len(), ?source, "search completed");
        Ok(SearchOutcome { tasks, source })
    }
}
