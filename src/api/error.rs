//! Mapping of service outcomes onto HTTP responses.

use crate::task::services::{FieldErrors, TaskLifecycleError};
use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Media type of problem detail bodies.
pub const PROBLEM_JSON: &str = "application/problem+json";

const VALIDATION_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
const VALIDATION_PROBLEM_TITLE: &str = "One or more validation errors occurred.";
const INTERNAL_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";
const INTERNAL_PROBLEM_TITLE: &str = "An unexpected error occurred.";

/// Problem details body (RFC 9457).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Problem type URI.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short human-readable summary.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Field name to messages, present on validation problems.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<std::collections::BTreeMap<String, Vec<String>>>,
}

impl ProblemDetails {
    /// Builds a validation problem from field errors.
    #[must_use]
    pub fn validation(errors: &FieldErrors) -> Self {
        Self {
            kind: VALIDATION_PROBLEM_TYPE.to_owned(),
            title: VALIDATION_PROBLEM_TITLE.to_owned(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            errors: Some(
                errors
                    .iter()
                    .map(|(field, messages)| (field.to_owned(), messages.to_vec()))
                    .collect(),
            ),
        }
    }

    /// Builds an internal error problem without exposing details.
    #[must_use]
    pub fn internal() -> Self {
        Self {
            kind: INTERNAL_PROBLEM_TYPE.to_owned(),
            title: INTERNAL_PROBLEM_TITLE.to_owned(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            errors: None,
        }
    }
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected; answered with 400 and a problem body.
    #[error("request validation failed: {0}")]
    Validation(FieldErrors),
    /// No task matched; answered with an empty 404.
    #[error("task not found")]
    NotFound,
    /// Unexpected failure; answered with 500 and a generic problem body.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Validation(errors) => Self::Validation(errors),
            TaskLifecycleError::Repository(repository_error) => {
                Self::Internal(repository_error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => problem_response(
                StatusCode::BAD_REQUEST,
                &ProblemDetails::validation(&errors),
            ),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(detail) => {
                error!(%detail, "request failed");
                problem_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &ProblemDetails::internal(),
                )
            }
        }
    }
}

fn problem_response(status: StatusCode, problem: &ProblemDetails) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, PROBLEM_JSON)],
        Json(problem),
    )
        .into_response()
}
