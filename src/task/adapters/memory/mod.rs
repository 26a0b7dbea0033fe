//! In-memory adapters for tests and single-session use.

mod task;

pub use task::InMemoryTaskStore;
