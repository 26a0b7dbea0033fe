//! Shared helpers for integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at noon UTC on a given day.
///
/// Year-less syllabus dates resolve against this clock's year, keeping
/// expectations independent of when the suite runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock frozen on the given day.
    ///
    /// # Errors
    ///
    /// Returns an error when the components do not form a valid date.
    pub fn on(year: i32, month: u32, day: u32) -> Result<Self, eyre::Report> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .map(Self)
            .ok_or_else(|| eyre::eyre!("invalid fixed clock date {year}-{month}-{day}"))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
