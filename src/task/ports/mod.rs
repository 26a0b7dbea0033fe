//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by services.

pub mod repository;

pub use repository::{TaskStore, TaskStoreError, TaskStoreResult};
