//! Then steps for task status transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use rstest_bdd_macros::then;
use taskdesk::task::{
    adapters::memory::ServiceCall,
    domain::{Status, TaskDomainError},
    ports::TaskService,
    services::TaskLifecycleError,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskTransitionWorld, status: String) -> Result<(), eyre::Report> {
    let expected: Status = status
        .parse()
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let stored = run_async(world.backend.get_task(task.id()))?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, backend holds {}",
            stored.status()
        ));
    }

    Ok(())
}

#[then(r#"the change is rejected with "{message}""#)]
fn change_is_rejected(world: &TaskTransitionWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    let Err(TaskLifecycleError::Domain(err @ TaskDomainError::InvalidStatusTransition { .. })) =
        result
    else {
        return Err(eyre::eyre!(
            "expected InvalidStatusTransition error, got {result:?}"
        ));
    };
    if err.to_string() != message {
        return Err(eyre::eyre!("unexpected rejection message: {err}"));
    }

    Ok(())
}

#[then("the number of status updates sent is {count:usize}")]
fn status_updates_sent(world: &TaskTransitionWorld, count: usize) -> Result<(), eyre::Report> {
    let sent = world
        .backend
        .calls()?
        .iter()
        .filter(|call| matches!(call, ServiceCall::UpdateStatus(..)))
        .count();
    if sent != count {
        return Err(eyre::eyre!("expected {count} status updates, backend saw {sent}"));
    }
    Ok(())
}
