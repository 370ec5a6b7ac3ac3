//! Service layer for task creation and retrieval.

use super::validation::{
    CreateTaskRequest, FieldErrors, ValidationStage, validate_and_build_draft,
};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The request failed validation; nothing was stored.
    #[error("task validation failed: {0}")]
    Validation(FieldErrors),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task creation and retrieval service.
///
/// Holds no per-request state; clones share the repository and clock.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates a creation request and stores the resulting task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the request is
    /// rejected (the repository is not called) or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        info!(
            title = request.title.as_deref(),
            "received request to create task"
        );

        let draft = match validate_and_build_draft(&request, &*self.clock) {
            Ok(draft) => draft,
            Err(errors) => {
                log_rejection(&request, &errors);
                return Err(TaskLifecycleError::Validation(errors));
            }
        };

        let task = self.repository.insert(&draft).await?;
        info!(id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        info!(%id, "fetching task");
        let task = self.repository.find_by_id(id).await?;
        match &task {
            Some(_) => info!(%id, "task found"),
            None => info!(%id, "task not found"),
        }
        Ok(task)
    }
}

fn log_rejection(request: &CreateTaskRequest, errors: &FieldErrors) {
    match ValidationStage::of(errors) {
        ValidationStage::Structure => {
            warn!(%errors, "task creation request is missing or has over-length fields");
        }
        ValidationStage::Status => {
            warn!(status = request.status.as_deref(), "invalid task status");
        }
        ValidationStage::DueDate => {
            warn!(due_at = ?request.due_at, "task due date is not in the future");
        }
    }
}
