//! Given steps for task status transition BDD scenarios.

use super::world::TaskTransitionWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::task::domain::{Status, Task, TaskId, TransitionEnforcement, TransitionPolicy};

#[given(r#"a task "{title}" with status "{status}""#)]
fn task_with_status(
    world: &mut TaskTransitionWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed: Status = status.parse().wrap_err("parse scenario status")?;
    let task = Task::new(TaskId::new(1), title, parsed);
    world
        .backend
        .seed([task.clone()])
        .wrap_err("seed task for transition scenario")?;
    world.current_task = Some(task);
    Ok(())
}

#[given(r#"the transition policy is "{mode}""#)]
fn transition_policy_is(world: &mut TaskTransitionWorld, mode: String) -> Result<(), eyre::Report> {
    let enforcement = TransitionEnforcement::parse(&mode)
        .ok_or_else(|| eyre::eyre!("unknown transition policy in scenario: {mode}"))?;
    world.policy = TransitionPolicy::new(enforcement);
    Ok(())
}
