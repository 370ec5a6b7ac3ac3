//! Repository-level tests for the in-memory task store.

use super::helpers::{draft, repo};
use crate::test_helpers::{FixedClock, clock};
use docket::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskId, ports::TaskRepository,
};
use rstest::rstest;
use std::collections::BTreeSet;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_identifier_and_keeps_fields(
    repo: InMemoryTaskRepository,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let pending = draft(&clock, "Prepare case file", Some("Case 12345"))?;

    let stored = repo.insert(&pending).await?;

    eyre::ensure!(stored.id() == TaskId::new(1), "first id should be 1");
    eyre::ensure!(stored.title() == pending.title(), "title mismatch");
    eyre::ensure!(
        stored.description() == pending.description(),
        "description mismatch"
    );
    eyre::ensure!(stored.created_at() == pending.created_at(), "created_at mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_stored_task(
    repo: InMemoryTaskRepository,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let first = repo.insert(&draft(&clock, "First", None)?).await?;
    let second = repo.insert(&draft(&clock, "Second", None)?).await?;

    eyre::ensure!(repo.find_by_id(first.id()).await? == Some(first), "first lost");
    eyre::ensure!(repo.find_by_id(second.id()).await? == Some(second), "second lost");
    eyre::ensure!(repo.find_by_id(TaskId::new(3)).await?.is_none(), "phantom task");
    eyre::ensure!(repo.len()? == 2, "expected two stored tasks");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_inserts_receive_unique_identifiers(
    repo: InMemoryTaskRepository,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let repo = Arc::new(repo);
    let mut handles = Vec::new();
    for index in 0..32 {
        let repo = Arc::clone(&repo);
        let pending = draft(&clock, &format!("Task {index}"), None)?;
        handles.push(tokio::spawn(async move { repo.insert(&pending).await }));
    }

    let mut ids = BTreeSet::new();
    for handle in handles {
        let task = handle.await??;
        ids.insert(task.id().value());
    }

    let expected: BTreeSet<i32> = (1..=32).collect();
    eyre::ensure!(ids == expected, "identifiers were not unique and dense: {ids:?}");
    Ok(())
}
