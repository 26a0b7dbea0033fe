//! Domain model for dashboard task records.
//!
//! Tasks carry their course, due date and time, progress state and
//! provenance, and can be bucketed into weeks of term. Infrastructure
//! concerns stay outside of the domain boundary.

mod due;
mod error;
mod fields;
mod ids;
mod schedule;
mod task;

pub use due::{CanonicalDate, DueTime};
pub use error::{ParseTaskFieldError, TaskDomainError};
pub use fields::{TaskCategory, TaskKind, TaskSource, TaskStatus};
pub use ids::{CourseId, TaskId};
pub use schedule::{WeeklySchedule, calendar_week_number, term_week_number};
pub use task::{PersistedTaskData, Task};

pub(crate) use due::empty_as_none;
