//! Domain model for task tracking.
//!
//! A task is created from a validated [`TaskDraft`] and becomes a [`Task`]
//! once the store assigns its identifier. Infrastructure concerns stay
//! outside of the domain boundary.

mod error;
mod ids;
mod task;
mod text;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskStatus};
pub use text::{TaskDescription, TaskTitle};
