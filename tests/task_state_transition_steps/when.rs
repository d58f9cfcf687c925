//! When steps for task status transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdesk::task::domain::Status;

#[when(r#"the task status is changed to "{target_status}""#)]
fn change_task_status(
    world: &mut TaskTransitionWorld,
    target_status: String,
) -> Result<(), eyre::Report> {
    let target: Status = target_status.parse().wrap_err("parse scenario status")?;
    let task = world
        .current_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let result = run_async(world.service().change_status(&task, target));
    if let Ok(ref updated) = result {
        world.current_task = Some(updated.clone());
    }
    world.last_transition_result = Some(result);
    Ok(())
}
