//! Route configuration for the task API.

use super::handlers::{create_task, get_task};
use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use axum::Router;
use axum::routing::{get, post};
use mockable::Clock;
use std::path::Path;
use tower_http::services::ServeDir;

/// Base path of the task resource.
pub const TASKS_PATH: &str = "/api/tasks";

/// Creates the router exposing the task endpoints.
pub fn create_router<R, C>(service: TaskLifecycleService<R, C>) -> Router
where
    R: TaskRepository + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(TASKS_PATH, post(create_task::<R, C>))
        .route(&format!("{TASKS_PATH}/{{id}}"), get(get_task::<R, C>))
        .with_state(service)
}

/// Serves files from `dir` for every path the API does not handle.
///
/// Directory requests resolve to their `index.html`.
#[must_use]
pub fn with_static_files(router: Router, dir: &Path) -> Router {
    router.fallback_service(ServeDir::new(dir))
}
