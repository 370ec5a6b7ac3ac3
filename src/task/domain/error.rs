//! Error types for task domain validation and parsing.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("task title is {actual} characters long, maximum is {max}")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },

    /// The task description exceeds the maximum length.
    #[error("task description is {actual} characters long, maximum is {max}")]
    DescriptionTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },

    /// The due date is not strictly after the creation instant.
    #[error("due date {due_at} is not after creation time {created_at}")]
    DueDateNotInFuture {
        /// Requested due date.
        due_at: DateTime<FixedOffset>,
        /// Creation instant the due date was compared against.
        created_at: DateTime<FixedOffset>,
    },
}

/// Error returned while parsing a task status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
