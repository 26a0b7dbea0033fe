//! Dashboard settings relevant to syllabus import and weekly views.
//!
//! Settings arrive as the dashboard's settings JSON object. Only the keys
//! used here are read; the rest of the object is ignored.

use crate::syllabus::domain::RecognizerConfig;
use crate::task::domain::{CanonicalDate, DueTime, empty_as_none};
use serde::Deserialize;
use thiserror::Error;

/// Errors returned while loading dashboard settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings document is not valid JSON or holds an invalid value.
    #[error("invalid dashboard settings: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Settings that shape recognition and scheduling.
///
/// # Examples
///
/// ```
/// use syllabus_tracker::config::DashboardSettings;
///
/// let settings = DashboardSettings::from_json(
///     r#"{"termStart": "2026-01-13", "defaultDueTime": "17:00", "termName": "Spring 2026"}"#,
/// )
/// .expect("valid settings");
/// assert_eq!(settings.default_due_time.to_string(), "17:00");
/// assert_eq!(
///     settings.term_start.map(|date| date.to_string()).as_deref(),
///     Some("2026-01-13")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Due time stamped on imported candidates.
    pub default_due_time: DueTime,
    /// First day of term; weeks are counted from here when set.
    pub term_start: Option<CanonicalDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsRecord {
    #[serde(default, with = "empty_as_none")]
    default_due_time: Option<DueTime>,
    #[serde(default, with = "empty_as_none")]
    term_start: Option<CanonicalDate>,
}

impl DashboardSettings {
    /// Parses the dashboard's settings JSON.
    ///
    /// Missing or empty `defaultDueTime` falls back to end of day; missing
    /// or empty `termStart` leaves the term start unset.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Malformed`] when the document is not a JSON
    /// object or a present value is not a valid time or date.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let record: SettingsRecord = serde_json::from_str(json)?;
        Ok(Self {
            default_due_time: record.default_due_time.unwrap_or_default(),
            term_start: record.term_start,
        })
    }

    /// Returns a recognizer configuration using these settings.
    #[must_use]
    pub fn recognizer_config(&self) -> RecognizerConfig {
        RecognizerConfig::default().with_default_due_time(self.default_due_time)
    }
}
