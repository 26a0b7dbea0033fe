//! Normalization of loosely written date fragments.
//!
//! Syllabi rarely state the year, so every form except the ISO prefix
//! resolves against the current calendar year. A syllabus parsed in
//! December that lists a January deadline therefore lands in the wrong
//! year; callers that care must pin the year through
//! [`normalize_date_in_year`].

use crate::task::domain::CanonicalDate;
use chrono::Datelike;
use mockable::Clock;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const MONTH_PREFIXES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static ISO_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("valid ISO prefix regex")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\s+([0-9]{1,2})")
        .expect("valid month-day regex")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static NUMERIC_SLASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})").expect("valid numeric slash regex")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)")
        .expect("valid day-month regex")
});

/// Date fragment shapes searched for inside free text.
///
/// The ISO form is omitted; syllabi do not write dates that way inline.
#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static INLINE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\s+[0-9]{1,2}",
        r"|[0-9]{1,2}/[0-9]{1,2}",
        r"|[0-9]{1,2}\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)",
    ))
    .expect("valid inline date fragment regex")
});

/// Recognized date notations, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateForm {
    /// `YYYY-MM-DD`, optionally followed by a `T` time component.
    IsoPrefix,
    /// Month name then day, e.g. `Sep 12` or `September 12`.
    MonthDay,
    /// Month then day separated by a slash, e.g. `9/12`.
    NumericSlash,
    /// Day then month name, e.g. `12 Sep`.
    DayMonth,
}

impl DateForm {
    /// Forms in priority order; the first that matches wins.
    pub const PRIORITY: [Self; 4] = [
        Self::IsoPrefix,
        Self::MonthDay,
        Self::NumericSlash,
        Self::DayMonth,
    ];

    /// Returns the first form whose pattern matches the start of `fragment`.
    #[must_use]
    pub fn detect(fragment: &str) -> Option<Self> {
        let trimmed = fragment.trim();
        Self::PRIORITY
            .into_iter()
            .find(|form| form.pattern().is_match(trimmed))
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::IsoPrefix => &ISO_PREFIX,
            Self::MonthDay => &MONTH_DAY,
            Self::NumericSlash => &NUMERIC_SLASH,
            Self::DayMonth => &DAY_MONTH,
        }
    }

    fn resolve(self, captures: &Captures<'_>, year: i32) -> Option<CanonicalDate> {
        match self {
            Self::IsoPrefix => {
                let explicit_year = capture_number::<i32>(captures, 1)?;
                let month = capture_number(captures, 2)?;
                let day = capture_number(captures, 3)?;
                CanonicalDate::from_ymd(explicit_year, month, day)
            }
            Self::MonthDay => {
                let month = month_number(captures.get(1)?.as_str())?;
                let day = capture_number(captures, 2)?;
                CanonicalDate::from_ymd(year, month, day)
            }
            Self::NumericSlash => {
                let month = capture_number(captures, 1)?;
                let day = capture_number(captures, 2)?;
                CanonicalDate::from_ymd(year, month, day)
            }
            Self::DayMonth => {
                let day = capture_number(captures, 1)?;
                let month = month_number(captures.get(2)?.as_str())?;
                CanonicalDate::from_ymd(year, month, day)
            }
        }
    }
}

/// Normalizes a date fragment, assuming the clock's current local year when
/// the fragment omits one.
///
/// Returns `None` when no form matches or the result is not a real calendar
/// date.
#[must_use]
pub fn normalize_date(fragment: &str, clock: &impl Clock) -> Option<CanonicalDate> {
    normalize_date_in_year(fragment, clock.local().year())
}

/// Normalizes a date fragment, using `year` when the fragment omits one.
///
/// # Examples
///
/// ```
/// use syllabus_tracker::syllabus::domain::normalize_date_in_year;
///
/// let date = normalize_date_in_year("12 Sep", 2026).expect("recognized");
/// assert_eq!(date.to_string(), "2026-09-12");
/// assert!(normalize_date_in_year("not a date", 2026).is_none());
/// ```
#[must_use]
pub fn normalize_date_in_year(fragment: &str, year: i32) -> Option<CanonicalDate> {
    let trimmed = fragment.trim();
    let (form, captures) = DateForm::PRIORITY
        .into_iter()
        .find_map(|form| form.pattern().captures(trimmed).map(|caps| (form, caps)))?;
    form.resolve(&captures, year)
}

/// Finds the leftmost date-like fragment embedded in a line of text.
pub(crate) fn find_inline_fragment(text: &str) -> Option<regex::Match<'_>> {
    INLINE_FRAGMENT.find(text)
}

fn capture_number<T: std::str::FromStr>(captures: &Captures<'_>, group: usize) -> Option<T> {
    captures.get(group)?.as_str().parse().ok()
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    let index = MONTH_PREFIXES.iter().position(|month| *month == prefix)?;
    u32::try_from(index + 1).ok()
}
