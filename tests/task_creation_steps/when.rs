//! When steps for task creation BDD scenarios.

use super::world::{TaskCreationWorld, run_async};
use docket::task::domain::TaskId;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the task is submitted")]
fn submit_task(world: &mut TaskCreationWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    world.last_create_result = Some(run_async(world.service.create(request)));
    Ok(())
}

#[when("task {id:i32} is requested")]
fn request_task(world: &mut TaskCreationWorld, id: i32) -> Result<(), eyre::Report> {
    let found = run_async(world.service.find_by_id(TaskId::new(id)))
        .wrap_err("look up task in scenario")?;
    world.last_lookup = Some(found);
    Ok(())
}
