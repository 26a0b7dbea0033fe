//! Week-of-term bucketing for the weekly view.

use super::{CanonicalDate, Task};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

const DAYS_PER_WEEK: u32 = 7;

/// Returns the 1-based week of term that `date` falls in.
///
/// The start date and the six days after it are week 1. Dates before the
/// term starts are clamped to week 1.
///
/// # Examples
///
/// ```
/// use syllabus_tracker::task::domain::{CanonicalDate, term_week_number};
///
/// let start: CanonicalDate = "2026-01-13".parse().expect("valid date");
/// let due: CanonicalDate = "2026-01-20".parse().expect("valid date");
/// assert_eq!(term_week_number(due, start), 2);
/// ```
#[must_use]
pub fn term_week_number(date: CanonicalDate, term_start: CanonicalDate) -> u32 {
    let elapsed_days = date
        .naive()
        .signed_duration_since(term_start.naive())
        .num_days();
    u32::try_from(elapsed_days)
        .map_or(1, |days| days.saturating_add(1).div_ceil(DAYS_PER_WEEK))
        .max(1)
}

/// Returns the Sunday-based week of the calendar year that `date` falls in.
///
/// Used when no term start is configured.
#[must_use]
pub fn calendar_week_number(date: CanonicalDate) -> u32 {
    let naive = date.naive();
    let offset = NaiveDate::from_ymd_opt(naive.year(), 1, 1)
        .map_or(0, |new_year| new_year.weekday().num_days_from_sunday());
    (naive.ordinal0() + offset + 1).div_ceil(DAYS_PER_WEEK)
}

/// Tasks grouped by the week they are due in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    weeks: BTreeMap<u32, Vec<Task>>,
    unscheduled: Vec<Task>,
}

impl WeeklySchedule {
    /// Groups tasks by term week, or by calendar week when `term_start` is
    /// `None`.
    ///
    /// Each week is ordered by due date; tasks without a due date are kept
    /// aside in their original order.
    #[must_use]
    pub fn from_tasks(
        tasks: impl IntoIterator<Item = Task>,
        term_start: Option<CanonicalDate>,
    ) -> Self {
        let mut schedule = Self::default();
        for task in tasks {
            match task.due_date() {
                Some(due_date) => {
                    let week = term_start.map_or_else(
                        || calendar_week_number(due_date),
                        |start| term_week_number(due_date, start),
                    );
                    schedule.weeks.entry(week).or_default().push(task);
                }
                None => schedule.unscheduled.push(task),
            }
        }
        for bucket in schedule.weeks.values_mut() {
            bucket.sort_by_key(Task::due_date);
        }
        schedule
    }

    /// Iterates over non-empty weeks in ascending order.
    pub fn weeks(&self) -> impl Iterator<Item = (u32, &[Task])> {
        self.weeks
            .iter()
            .map(|(week, tasks)| (*week, tasks.as_slice()))
    }

    /// Returns the tasks due in `week`, or an empty slice.
    #[must_use]
    pub fn week(&self, week: u32) -> &[Task] {
        self.weeks.get(&week).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns tasks that have no due date.
    #[must_use]
    pub fn unscheduled(&self) -> &[Task] {
        &self.unscheduled
    }

    /// Returns `true` when the schedule holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty() && self.unscheduled.is_empty()
    }
}
