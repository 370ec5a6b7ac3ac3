//! Docket: a small task-tracking service.
//!
//! Clients submit a task (title, optional description, status, due date)
//! and later retrieve it by identifier. Creation requests are validated and
//! normalized before anything is written; retrieval is a primary-key lookup.
//!
//! # Architecture
//!
//! Docket follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` stores, plus the HTTP surface
//!
//! # Modules
//!
//! - [`task`]: Task domain, store port, adapters, and services
//! - [`api`]: Axum router and handlers for `/api/tasks`
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: `tracing` subscriber setup

pub mod api;
pub mod config;
pub mod task;
pub mod telemetry;
