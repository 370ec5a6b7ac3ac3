//! Given steps for task creation BDD scenarios.

use super::world::TaskCreationWorld;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use docket::task::services::CreateTaskRequest;
use rstest_bdd_macros::given;

fn minutes_from_now(minutes: i64) -> DateTime<FixedOffset> {
    (Utc::now() + Duration::minutes(minutes)).fixed_offset()
}

fn signed_minutes(minutes: u64) -> Result<i64, eyre::Report> {
    i64::try_from(minutes).map_err(|_| eyre::eyre!("minute offset {minutes} is too large"))
}

#[given(r#"a task request titled "{title}" with status "{status}" due in {minutes:u64} minutes"#)]
fn request_due_in(
    world: &mut TaskCreationWorld,
    title: String,
    status: String,
    minutes: u64,
) -> Result<(), eyre::Report> {
    let due_at = minutes_from_now(signed_minutes(minutes)?);
    world.pending_request = Some(CreateTaskRequest::new(title, status, due_at));
    Ok(())
}

#[given(r#"a task request titled "{title}" with status "{status}" due {minutes:u64} minutes ago"#)]
fn request_due_ago(
    world: &mut TaskCreationWorld,
    title: String,
    status: String,
    minutes: u64,
) -> Result<(), eyre::Report> {
    let due_at = minutes_from_now(-signed_minutes(minutes)?);
    world.pending_request = Some(CreateTaskRequest::new(title, status, due_at));
    Ok(())
}

#[given(r#"the request has description "{description}""#)]
fn request_has_description(
    world: &mut TaskCreationWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    world.pending_request = Some(request.with_description(description));
    Ok(())
}
