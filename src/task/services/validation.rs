//! Validation and normalization of task creation requests.
//!
//! [`validate_and_build_draft`] runs three ordered stages and stops at the
//! first stage that reports a problem:
//!
//! 1. structural checks on every field (presence and raw length), with all
//!    offending fields reported together;
//! 2. status parsing;
//! 3. the due date check against a single clock reading, which also becomes
//!    the draft's creation instant.

use crate::task::domain::{TaskDescription, TaskDomainError, TaskDraft, TaskStatus, TaskTitle};
use chrono::{DateTime, FixedOffset};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wire name of the title field.
pub const TITLE_FIELD: &str = "title";
/// Wire name of the description field.
pub const DESCRIPTION_FIELD: &str = "description";
/// Wire name of the status field.
pub const STATUS_FIELD: &str = "status";
/// Wire name of the due date field.
pub const DUE_AT_FIELD: &str = "dueAt";

/// Message attached to `status` when it names no known status.
pub const INVALID_STATUS_MESSAGE: &str = "Status must be one of: New, InProgress, Completed.";
/// Message attached to `dueAt` when it is not in the future.
pub const DUE_AT_NOT_IN_FUTURE_MESSAGE: &str = "Due date and time must be in the future.";

/// Untrusted task creation input.
///
/// Every field is optional so that missing values surface as field errors
/// rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Raw title.
    #[serde(default)]
    pub title: Option<String>,
    /// Raw description.
    #[serde(default)]
    pub description: Option<String>,
    /// Raw status name.
    #[serde(default)]
    pub status: Option<String>,
    /// Requested due date.
    #[serde(default)]
    pub due_at: Option<DateTime<FixedOffset>>,
}

impl CreateTaskRequest {
    /// Creates a request with every required field set.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        status: impl Into<String>,
        due_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            status: Some(status.into()),
            due_at: Some(due_at),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Field name to validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates an error map holding a single message.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Appends a message to the given field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns the messages recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns `true` when the field has at least one message.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns `true` when no field has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of offending fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over offending fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                first = false;
                write!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Validation stage that rejected a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    /// Missing or over-length fields.
    Structure,
    /// The status names no known status.
    Status,
    /// The due date is not in the future.
    DueDate,
}

impl ValidationStage {
    /// Identifies the stage that produced `errors`.
    ///
    /// Status and due date failures are always reported alone, so any other
    /// shape comes from the structural checks.
    #[must_use]
    pub fn of(errors: &FieldErrors) -> Self {
        let only = |field: &str, message: &str| {
            errors.len() == 1 && errors.get(field) == Some(&[message.to_owned()][..])
        };
        if only(STATUS_FIELD, INVALID_STATUS_MESSAGE) {
            Self::Status
        } else if only(DUE_AT_FIELD, DUE_AT_NOT_IN_FUTURE_MESSAGE) {
            Self::DueDate
        } else {
            Self::Structure
        }
    }
}

/// Validates a creation request and normalizes it into a draft.
///
/// The clock is read exactly once.
///
/// # Errors
///
/// Returns the [`FieldErrors`] of the first failing stage. Structural
/// errors may cover several fields; status and due date errors are
/// reported alone.
pub fn validate_and_build_draft(
    request: &CreateTaskRequest,
    clock: &impl Clock,
) -> Result<TaskDraft, FieldErrors> {
    let fields = check_structure(request)?;

    let status = TaskStatus::try_from(fields.status)
        .map_err(|_| FieldErrors::single(STATUS_FIELD, INVALID_STATUS_MESSAGE))?;

    TaskDraft::stamped(
        fields.title,
        fields.description,
        status,
        fields.due_at,
        clock,
    )
    .map_err(|err| domain_error_to_field_errors(&err))
}

/// Fields that passed structural checks.
struct CheckedFields<'a> {
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: &'a str,
    due_at: DateTime<FixedOffset>,
}

fn check_structure(request: &CreateTaskRequest) -> Result<CheckedFields<'_>, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title_input = request.title.as_deref().filter(|raw| !raw.trim().is_empty());
    if title_input.is_none() {
        errors.add(TITLE_FIELD, required_message(TITLE_FIELD));
    }
    if let Some(raw) = request.title.as_deref() {
        check_max_length(&mut errors, TITLE_FIELD, raw, TaskTitle::MAX_LENGTH);
    }

    if let Some(raw) = request.description.as_deref() {
        check_max_length(&mut errors, DESCRIPTION_FIELD, raw, TaskDescription::MAX_LENGTH);
    }

    let status_input = request.status.as_deref().filter(|raw| !raw.trim().is_empty());
    if status_input.is_none() {
        errors.add(STATUS_FIELD, required_message(STATUS_FIELD));
    }

    if request.due_at.is_none() {
        errors.add(DUE_AT_FIELD, required_message(DUE_AT_FIELD));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let (Some(raw_title), Some(status), Some(due_at)) = (title_input, status_input, request.due_at)
    else {
        return Err(errors);
    };
    let title = TaskTitle::new(raw_title).map_err(|err| domain_error_to_field_errors(&err))?;
    let description = TaskDescription::from_input(request.description.as_deref())
        .map_err(|err| domain_error_to_field_errors(&err))?;

    Ok(CheckedFields {
        title,
        description,
        status,
        due_at,
    })
}

fn check_max_length(errors: &mut FieldErrors, field: &str, raw: &str, max: usize) {
    if raw.chars().count() > max {
        errors.add(field, max_length_message(field, max));
    }
}

fn required_message(field: &str) -> String {
    format!("The {field} field is required.")
}

fn max_length_message(field: &str, max: usize) -> String {
    format!("The field {field} must be a string with a maximum length of {max}.")
}

fn domain_error_to_field_errors(err: &TaskDomainError) -> FieldErrors {
    match err {
        TaskDomainError::EmptyTitle => {
            FieldErrors::single(TITLE_FIELD, required_message(TITLE_FIELD))
        }
        TaskDomainError::TitleTooLong { max, .. } => {
            FieldErrors::single(TITLE_FIELD, max_length_message(TITLE_FIELD, *max))
        }
        TaskDomainError::DescriptionTooLong { max, .. } => FieldErrors::single(
            DESCRIPTION_FIELD,
            max_length_message(DESCRIPTION_FIELD, *max),
        ),
        TaskDomainError::DueDateNotInFuture { .. } => {
            FieldErrors::single(DUE_AT_FIELD, DUE_AT_NOT_IN_FUTURE_MESSAGE)
        }
    }
}
