//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Trimmed task title.
    pub title: String,
    /// Optional trimmed description.
    pub description: Option<String>,
    /// Canonical status name.
    pub status: String,
    /// Due date.
    pub due_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Trimmed task title.
    pub title: String,
    /// Optional trimmed description.
    pub description: Option<String>,
    /// Canonical status name.
    pub status: String,
    /// Due date.
    pub due_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
