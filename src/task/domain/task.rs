//! Task entity, draft, and status types.

use super::{ParseTaskStatusError, TaskDescription, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, FixedOffset};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has been recorded but work has not started.
    New,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Completed,
}

impl TaskStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 3] = [Self::New, Self::InProgress, Self::Completed];

    /// Returns the canonical display and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized task that has passed validation but has not been stored.
///
/// A draft always satisfies `due_at > created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    due_at: DateTime<FixedOffset>,
    created_at: DateTime<FixedOffset>,
}

impl TaskDraft {
    /// Creates a draft stamped with an explicit creation instant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateNotInFuture`] when `due_at` is not
    /// strictly after `created_at`.
    pub fn new(
        title: TaskTitle,
        description: Option<TaskDescription>,
        status: TaskStatus,
        due_at: DateTime<FixedOffset>,
        created_at: DateTime<FixedOffset>,
    ) -> Result<Self, TaskDomainError> {
        if due_at <= created_at {
            return Err(TaskDomainError::DueDateNotInFuture { due_at, created_at });
        }
        Ok(Self {
            title,
            description,
            status,
            due_at,
            created_at,
        })
    }

    /// Creates a draft stamped with the clock's current UTC instant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateNotInFuture`] when `due_at` is not
    /// strictly after the current instant.
    pub fn stamped(
        title: TaskTitle,
        description: Option<TaskDescription>,
        status: TaskStatus,
        due_at: DateTime<FixedOffset>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        Self::new(title, description, status, due_at, clock.utc().fixed_offset())
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<FixedOffset> {
        self.due_at
    }

    /// Returns the creation instant.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }
}

/// Persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    due_at: DateTime<FixedOffset>,
    created_at: DateTime<FixedOffset>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted due date.
    pub due_at: DateTime<FixedOffset>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<FixedOffset>,
}

impl Task {
    /// Attaches a store-assigned identifier to a draft.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        let TaskDraft {
            title,
            description,
            status,
            due_at,
            created_at,
        } = draft;
        Self {
            id,
            title,
            description,
            status,
            due_at,
            created_at,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            due_at: data.due_at,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<FixedOffset> {
        self.due_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }
}
