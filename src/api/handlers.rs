//! Task HTTP handlers.
//!
//! Handlers stay thin: they translate between HTTP and the task service and
//! leave validation, persistence, and shaping to [`crate::task::services`].

use super::error::ApiError;
use super::routes::TASKS_PATH;
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{CreateTaskRequest, FieldErrors, TaskLifecycleService, TaskResponse},
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use mockable::Clock;
use tracing::debug;

/// Field key used when the body itself cannot be read.
pub const REQUEST_FIELD: &str = "request";

/// `POST /api/tasks` - validates and stores a task.
///
/// # Response
///
/// - `201 Created` with the shaped task and a `Location` header
/// - `400 Bad Request` with a validation problem body
/// - `500 Internal Server Error` when storage fails
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for unreadable or invalid requests and
/// [`ApiError::Internal`] for storage failures.
pub async fn create_task<R, C>(
    State(service): State<TaskLifecycleService<R, C>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TaskResponse>), ApiError>
where
    R: TaskRepository + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "rejected unreadable task creation body");
        ApiError::Validation(FieldErrors::single(REQUEST_FIELD, rejection.body_text()))
    })?;

    let task = service.create(request).await?;
    let location = format!("{TASKS_PATH}/{}", task.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TaskResponse::from_task(&task)),
    ))
}

/// `GET /api/tasks/{id}` - returns a stored task.
///
/// A segment that is not a 32-bit integer is answered like an unknown
/// identifier.
///
/// # Response
///
/// - `200 OK` with the shaped task
/// - `404 Not Found` with an empty body
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no task matches and
/// [`ApiError::Internal`] for storage failures.
pub async fn get_task<R, C>(
    State(service): State<TaskLifecycleService<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = raw_id.parse::<TaskId>().map_err(|_| ApiError::NotFound)?;
    let task = service.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(TaskResponse::from_task(&task)))
}
