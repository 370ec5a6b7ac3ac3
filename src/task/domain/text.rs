//! Validated text values carried by a task.

use super::TaskDomainError;
use serde::Serialize;
use std::fmt;

/// Trimmed, non-empty task title of at most [`TaskTitle::MAX_LENGTH`]
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Maximum title length in characters, matching the `title` column.
    pub const MAX_LENGTH: usize = 200;

    /// Creates a title from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when nothing remains after
    /// trimming, or [`TaskDomainError::TitleTooLong`] when the trimmed value
    /// exceeds [`Self::MAX_LENGTH`].
    pub fn new(value: &str) -> Result<Self, TaskDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let actual = trimmed.chars().count();
        if actual > Self::MAX_LENGTH {
            return Err(TaskDomainError::TitleTooLong {
                max: Self::MAX_LENGTH,
                actual,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed, non-empty task description of at most
/// [`TaskDescription::MAX_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Maximum description length in characters, matching the
    /// `description` column.
    pub const MAX_LENGTH: usize = 1000;

    /// Normalizes optional raw input into an optional description.
    ///
    /// Absent, empty, and whitespace-only input all yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`] when the trimmed value
    /// exceeds [`Self::MAX_LENGTH`].
    pub fn from_input(value: Option<&str>) -> Result<Option<Self>, TaskDomainError> {
        let Some(trimmed) = value.map(str::trim).filter(|text| !text.is_empty()) else {
            return Ok(None);
        };
        let actual = trimmed.chars().count();
        if actual > Self::MAX_LENGTH {
            return Err(TaskDomainError::DescriptionTooLong {
                max: Self::MAX_LENGTH,
                actual,
            });
        }
        Ok(Some(Self(trimmed.to_owned())))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
