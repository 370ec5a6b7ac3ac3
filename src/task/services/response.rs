//! Wire-level projection of a persisted task.

use crate::task::domain::Task;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Shaped task returned to callers.
///
/// `status` carries the canonical status name (`New`, `InProgress`,
/// `Completed`) and `description` is `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Store-assigned identifier.
    pub id: i32,
    /// Trimmed title.
    pub title: String,
    /// Trimmed description, if any.
    pub description: Option<String>,
    /// Canonical status name.
    pub status: String,
    /// Due date.
    pub due_at: DateTime<FixedOffset>,
    /// Creation timestamp.
    pub created_at: DateTime<FixedOffset>,
}

impl TaskResponse {
    /// Shapes a persisted task for the wire.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|text| text.as_str().to_owned()),
            status: task.status().as_str().to_owned(),
            due_at: task.due_at(),
            created_at: task.created_at(),
        }
    }
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self::from_task(task)
    }
}
