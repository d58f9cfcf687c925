//! Shared fixtures for in-memory backend tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use taskdesk::task::{
    adapters::memory::InMemoryTaskService,
    domain::{Status, Task, TaskId},
    services::{TaskLifecycleService, TaskSearchService},
};

/// Clock pinned to [`now`].
#[derive(Debug, Clone, Copy)]
pub struct PinnedClock;

impl Clock for PinnedClock {
    fn local(&self) -> DateTime<Local> {
        now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        now()
    }
}

/// Instant every test treats as the present: Friday 2025-03-14 12:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0)
        .single()
        .expect("valid fixed instant")
}

/// Lifecycle service over the in-memory backend.
pub type Lifecycle = TaskLifecycleService<InMemoryTaskService, PinnedClock>;

/// Search service over the in-memory backend.
pub type Searcher = TaskSearchService<InMemoryTaskService, PinnedClock>;

/// Backend with the services wired to it.
pub struct Desk {
    pub backend: InMemoryTaskService,
    pub lifecycle: Lifecycle,
    pub searcher: Searcher,
}

impl Desk {
    /// Returns the ids of `tasks` in order.
    pub fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|task| task.id().value()).collect()
    }
}

/// Provides an empty backend and its services.
#[fixture]
pub fn desk() -> Desk {
    let backend = InMemoryTaskService::with_clock(Arc::new(PinnedClock));
    let shared = Arc::new(backend.clone());
    Desk {
        lifecycle: TaskLifecycleService::new(Arc::clone(&shared), Arc::new(PinnedClock)),
        searcher: TaskSearchService::new(shared, Arc::new(PinnedClock)),
        backend,
    }
}

/// Provides a backend seeded with a small board of tasks.
///
/// | id | title               | status      | due                  |
/// |----|---------------------|-------------|----------------------|
/// | 1  | Quarterly report    | PENDING     | today 17:00          |
/// | 2  | Team lunch          | NEW         | tomorrow 12:30       |
/// | 3  | Annual report       | IN_PROGRESS | two days ago         |
/// | 4  | Archive invoices    | COMPLETED   | yesterday            |
/// | 5  | Renew domain        | NEW         | in ten days          |
/// | 6  | Call supplier       | CANCELLED   | none                 |
#[fixture]
pub fn seeded_desk(desk: Desk) -> Desk {
    let today = now();
    desk
        .backend
        .seed([
            Task::new(TaskId::new(1), "Quarterly report", Status::Pending)
                .with_description("Numbers for the board")
                .with_due_at(today + Duration::hours(5)),
            Task::new(TaskId::new(2), "Team lunch", Status::New)
                .with_due_at(today + Duration::hours(24) + Duration::minutes(30)),
            Task::new(TaskId::new(3), "Annual report", Status::InProgress)
                .with_due_at(today - Duration::days(2)),
            Task::new(TaskId::new(4), "Archive invoices", Status::Completed)
                .with_due_at(today - Duration::days(1)),
            Task::new(TaskId::new(5), "Renew domain", Status::New)
                .with_description("Registrar sends a REPORT first")
                .with_due_at(today + Duration::days(10)),
            Task::new(TaskId::new(6), "Call supplier", Status::Cancelled),
        ])
        .expect("seed should succeed");
    desk
}
