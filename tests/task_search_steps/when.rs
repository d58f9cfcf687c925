//! When steps for task search BDD scenarios.

use super::world::{TaskSearchWorld, run_async};
use rstest_bdd_macros::when;

#[when("the search runs")]
fn search_runs(world: &mut TaskSearchWorld) {
    let result = run_async(world.searcher().search(&world.filters));
    world.outcome = Some(result);
}
