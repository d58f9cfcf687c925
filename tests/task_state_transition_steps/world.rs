//! Shared world state for task status transition BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::task::{
    adapters::memory::InMemoryTaskService,
    domain::{Task, TransitionPolicy},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskService, DefaultClock>;

/// Scenario world for task transition behaviour tests.
pub struct TaskTransitionWorld {
    pub backend: InMemoryTaskService,
    pub policy: TransitionPolicy,
    pub current_task: Option<Task>,
    pub last_transition_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskTransitionWorld {
    /// Creates a world with an empty backend and the enforcing policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: InMemoryTaskService::new(),
            policy: TransitionPolicy::default(),
            current_task: None,
            last_transition_result: None,
        }
    }

    /// Builds a lifecycle service over the world's backend and policy.
    #[must_use]
    pub fn service(&self) -> TestTaskService {
        TaskLifecycleService::new(Arc::new(self.backend.clone()), Arc::new(DefaultClock))
            .with_transition_policy(self.policy)
    }
}

impl Default for TaskTransitionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskTransitionWorld {
    TaskTransitionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
