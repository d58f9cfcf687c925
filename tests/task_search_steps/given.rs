//! Given steps for task search BDD scenarios.

use super::world::{TaskSearchWorld, scenario_now};
use chrono::Duration;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::task::domain::{DueDateRange, Status, Task, TaskId};

fn seed(
    world: &mut TaskSearchWorld,
    title: String,
    status: &str,
    offset: Duration,
) -> Result<(), eyre::Report> {
    let parsed: Status = status.parse().wrap_err("parse scenario status")?;
    let task = Task::new(TaskId::new(world.next_id), title, parsed).with_due_at(scenario_now() + offset);
    world.next_id += 1;
    world
        .backend
        .seed([task])
        .wrap_err("seed task for search scenario")?;
    Ok(())
}

#[given(r#"a task "{title}" with status "{status}" due in {hours:i64} hours"#)]
fn task_due_in(
    world: &mut TaskSearchWorld,
    title: String,
    status: String,
    hours: i64,
) -> Result<(), eyre::Report> {
    seed(world, title, &status, Duration::hours(hours))
}

#[given(r#"a task "{title}" with status "{status}" overdue by {hours:i64} hours"#)]
fn task_overdue_by(
    world: &mut TaskSearchWorld,
    title: String,
    status: String,
    hours: i64,
) -> Result<(), eyre::Report> {
    seed(world, title, &status, -Duration::hours(hours))
}

#[given("the backend search is unavailable")]
fn backend_search_unavailable(world: &mut TaskSearchWorld) -> Result<(), eyre::Report> {
    world.backend.set_search_offline(true)?;
    Ok(())
}

#[given(r#"the title filter "{title}""#)]
fn title_filter(world: &mut TaskSearchWorld, title: String) {
    world.filters = world.filters.clone().with_title(title);
}

#[given(r#"the status filter "{status}""#)]
fn status_filter(world: &mut TaskSearchWorld, status: String) -> Result<(), eyre::Report> {
    let parsed: Status = status.parse().wrap_err("parse scenario status")?;
    world.filters = world.filters.clone().with_status(parsed);
    Ok(())
}

#[given(r#"the due date range "{range}""#)]
fn due_date_range(world: &mut TaskSearchWorld, range: String) -> Result<(), eyre::Report> {
    let parsed: DueDateRange = range.parse().wrap_err("parse scenario range")?;
    world.filters = world.filters.clone().with_due_date_range(parsed);
    Ok(())
}
