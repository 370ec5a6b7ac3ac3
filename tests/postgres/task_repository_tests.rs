//! Repository tests for tasks stored in `PostgreSQL`.

use super::helpers::{CleanupGuard, ensure_template, execute_sql, setup_repository, test_runtime};
use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use docket::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{TaskDescription, TaskDraft, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

struct TaskDbContext {
    cluster: &'static TestCluster,
    db_name: String,
    repo: PostgresTaskRepository,
    rt: Runtime,
    _guard: CleanupGuard<'static>,
}

#[fixture]
fn task_db(shared_test_cluster: &'static TestCluster) -> TaskDbContext {
    let cluster = shared_test_cluster;
    ensure_template(cluster).expect("template setup");
    let db_name = format!("test_tasks_{}", uuid::Uuid::new_v4().simple());
    let guard = CleanupGuard::new(cluster, db_name.clone());
    let repo = setup_repository(cluster, &db_name).expect("repository setup");
    let rt = test_runtime().expect("tokio runtime");
    TaskDbContext {
        cluster,
        db_name,
        repo,
        rt,
        _guard: guard,
    }
}

fn plus_two_hours() -> FixedOffset {
    FixedOffset::east_opt(2 * 3600).expect("valid offset")
}

fn created_at() -> DateTime<FixedOffset> {
    plus_two_hours()
        .with_ymd_and_hms(2026, 5, 4, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

fn draft(title: &str, description: Option<&str>, status: TaskStatus) -> TaskDraft {
    TaskDraft::new(
        TaskTitle::new(title).expect("valid title"),
        TaskDescription::from_input(description).expect("valid description"),
        status,
        created_at() + Duration::days(1),
        created_at(),
    )
    .expect("valid draft")
}

#[rstest]
fn ensure_schema_is_idempotent(task_db: TaskDbContext) {
    let context = task_db;

    context
        .rt
        .block_on(context.repo.ensure_schema())
        .expect("first bootstrap on a migrated database");
    context
        .rt
        .block_on(context.repo.ensure_schema())
        .expect("second bootstrap");

    let stored = context
        .rt
        .block_on(context.repo.insert(&draft("After bootstrap", None, TaskStatus::New)))
        .expect("insert after bootstrap");
    assert_eq!(stored.id(), TaskId::new(1));
}

#[rstest]
fn inserts_receive_distinct_increasing_ids(task_db: TaskDbContext) {
    let context = task_db;

    let ids: Vec<i32> = ["First", "Second", "Third"]
        .into_iter()
        .map(|title| {
            context
                .rt
                .block_on(context.repo.insert(&draft(title, None, TaskStatus::New)))
                .expect("insert should succeed")
                .id()
                .value()
        })
        .collect();

    assert_eq!(ids, [1, 2, 3]);
}

#[rstest]
fn insert_then_find_returns_equal_task(task_db: TaskDbContext) {
    let context = task_db;
    let pending = draft("Prepare case file", Some("Case 12345"), TaskStatus::InProgress);

    let stored = context
        .rt
        .block_on(context.repo.insert(&pending))
        .expect("insert should succeed");
    let found = context
        .rt
        .block_on(context.repo.find_by_id(stored.id()))
        .expect("find_by_id should succeed")
        .expect("task should exist");

    assert_eq!(found, stored);
    assert_eq!(found.title(), pending.title());
    assert_eq!(found.description(), pending.description());
    assert_eq!(found.status(), TaskStatus::InProgress);
    assert_eq!(found.due_at(), pending.due_at());
    assert_eq!(found.created_at(), pending.created_at());
}

#[rstest]
fn stored_instants_are_utc_with_microsecond_precision(task_db: TaskDbContext) {
    let context = task_db;
    let created = created_at() + Duration::nanoseconds(250_000_400);
    let pending = TaskDraft::new(
        TaskTitle::new("Precise").expect("valid title"),
        None,
        TaskStatus::New,
        created + Duration::hours(1),
        created,
    )
    .expect("valid draft");

    let stored = context
        .rt
        .block_on(context.repo.insert(&pending))
        .expect("insert should succeed");

    assert_eq!(stored.created_at().offset().local_minus_utc(), 0);
    assert_eq!(
        stored.created_at(),
        created_at() + Duration::microseconds(250_000)
    );
    assert_eq!(
        stored.due_at(),
        created_at() + Duration::hours(1) + Duration::microseconds(250_000)
    );
}

#[rstest]
fn find_by_id_returns_none_for_unknown_id(task_db: TaskDbContext) {
    let context = task_db;

    let found = context
        .rt
        .block_on(context.repo.find_by_id(TaskId::new(99_999)))
        .expect("query should succeed");

    assert!(found.is_none());
}

#[rstest]
#[case("INSERT INTO tasks (title, status, due_at, created_at) VALUES ('Archived', 'Archived', now() + interval '1 day', now())")]
#[case("INSERT INTO tasks (title, status, due_at, created_at) VALUES ('   ', 'New', now() + interval '1 day', now())")]
#[case("INSERT INTO tasks (title, description, status, due_at, created_at) VALUES ('Blank', '  ', 'New', now() + interval '1 day', now())")]
fn check_constraints_reject_invalid_rows(task_db: TaskDbContext, #[case] sql: &str) {
    let context = task_db;

    let result = execute_sql(context.cluster, &context.db_name, sql);

    assert!(result.is_err(), "expected constraint violation for: {sql}");
}

#[rstest]
fn unknown_persisted_status_is_a_persistence_error(task_db: TaskDbContext) {
    let context = task_db;
    execute_sql(
        context.cluster,
        &context.db_name,
        concat!(
            "ALTER TABLE tasks DROP CONSTRAINT tasks_status_known; ",
            "INSERT INTO tasks (title, status, due_at, created_at) ",
            "VALUES ('Legacy', 'Archived', now() + interval '1 day', now());",
        ),
    )
    .expect("seed legacy row");

    let result = context.rt.block_on(context.repo.find_by_id(TaskId::new(1)));

    assert!(
        matches!(result, Err(TaskRepositoryError::Persistence(_))),
        "expected persistence error, got {result:?}"
    );
}
