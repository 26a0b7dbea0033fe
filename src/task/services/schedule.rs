//! Service layer for week-by-week task views.

use crate::task::{
    domain::{CanonicalDate, CourseId, WeeklySchedule},
    ports::{TaskStore, TaskStoreResult},
};
use std::sync::Arc;

/// Builds weekly schedules from the task store.
#[derive(Clone)]
pub struct TaskScheduleService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    term_start: Option<CanonicalDate>,
}

impl<S> TaskScheduleService<S>
where
    S: TaskStore,
{
    /// Creates a schedule service.
    ///
    /// Weeks are counted from `term_start`, or by calendar week when it is
    /// `None`.
    #[must_use]
    pub const fn new(store: Arc<S>, term_start: Option<CanonicalDate>) -> Self {
        Self { store, term_start }
    }

    /// Groups every stored task by week.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::ports::TaskStoreError`] when the store cannot
    /// be read.
    pub async fn weekly(&self) -> TaskStoreResult<WeeklySchedule> {
        let tasks = self.store.list().await?;
        Ok(WeeklySchedule::from_tasks(tasks, self.term_start))
    }

    /// Groups the tasks of one course by week.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::ports::TaskStoreError`] when the store cannot
    /// be read.
    pub async fn weekly_for_course(&self, course_id: &CourseId) -> TaskStoreResult<WeeklySchedule> {
        let tasks = self.store.list_by_course(course_id).await?;
        Ok(WeeklySchedule::from_tasks(tasks, self.term_start))
    }
}
