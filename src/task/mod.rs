//! Task creation and retrieval.
//!
//! A creation request is validated and normalized into a draft, the draft is
//! stored (which assigns its identifier), and the stored task is shaped into
//! a response. Retrieval is a primary-key lookup. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Validation, shaping, and orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
