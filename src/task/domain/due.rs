//! Due-date and due-time value objects in their canonical text forms.

use super::TaskDomainError;
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Calendar date rendered as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use syllabus_tracker::task::domain::CanonicalDate;
///
/// let date: CanonicalDate = "2026-01-15".parse().expect("valid date");
/// assert_eq!(date.to_string(), "2026-01-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// Creates a date from its components, or `None` when the combination
    /// is not a real calendar date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wraps an existing `chrono` date.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the wrapped `chrono` date.
    #[must_use]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }
}

impl FromStr for CanonicalDate {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDueDate(value.to_owned()))
    }
}

impl TryFrom<String> for CanonicalDate {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CanonicalDate> for String {
    fn from(value: CanonicalDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Wall-clock due time rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueTime(NaiveTime);

impl DueTime {
    /// Returns the end-of-day default, `23:59`.
    #[must_use]
    pub fn end_of_day() -> Self {
        Self(NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN))
    }

    /// Creates a due time from hour and minute.
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Returns the wrapped `chrono` time.
    #[must_use]
    pub const fn naive(self) -> NaiveTime {
        self.0
    }
}

impl Default for DueTime {
    fn default() -> Self {
        Self::end_of_day()
    }
}

impl FromStr for DueTime {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDueTime(value.to_owned()))
    }
}

impl TryFrom<String> for DueTime {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DueTime> for String {
    fn from(value: DueTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

/// Serde adapter storing `None` as an empty string.
///
/// The dashboard's JSON backups write unset dates and times as `""`; `null`
/// is accepted on input as well.
pub(crate) mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use std::fmt;
    use std::str::FromStr;

    pub(crate) fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: fmt::Display,
        S: Serializer,
    {
        match value {
            Some(inner) => serializer.collect_str(inner),
            None => serializer.serialize_str(""),
        }
    }

    pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: fmt::Display,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some).map_err(de::Error::custom)
    }
}
