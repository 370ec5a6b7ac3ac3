//! HTTP surface for task creation and retrieval.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/api/tasks` | [`handlers::create_task`] |
//! | GET | `/api/tasks/{id}` | [`handlers::get_task`] |

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ProblemDetails};
pub use routes::{TASKS_PATH, create_router, with_static_files};
