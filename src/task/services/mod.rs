//! Application services for task creation and retrieval.

mod lifecycle;
mod response;
mod validation;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use response::TaskResponse;
pub use validation::{
    CreateTaskRequest, DESCRIPTION_FIELD, DUE_AT_FIELD, DUE_AT_NOT_IN_FUTURE_MESSAGE,
    FieldErrors, INVALID_STATUS_MESSAGE, STATUS_FIELD, TITLE_FIELD, ValidationStage, validate_and_build_draft,
};
