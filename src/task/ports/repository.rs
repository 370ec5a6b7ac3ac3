//! Repository port for task persistence and point lookup.

use crate::task::domain::{Task, TaskDraft, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations assign identifiers atomically: concurrent inserts never
/// receive the same [`TaskId`], and an identifier is never reused.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a draft and returns the stored task with its new identifier.
    ///
    /// The write is all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the underlying store
    /// fails.
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The store has no identifiers left to assign.
    #[error("task identifier space exhausted")]
    IdentifiersExhausted,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
