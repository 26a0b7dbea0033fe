//! Recognizer configuration.

use crate::task::domain::DueTime;
use serde::{Deserialize, Serialize};

/// Default maximum title length in characters before truncation.
pub const DEFAULT_MAX_TITLE_CHARS: usize = 100;

/// Configuration for syllabus recognition.
///
/// # Examples
///
/// ```
/// use syllabus_tracker::syllabus::domain::RecognizerConfig;
/// use syllabus_tracker::task::domain::DueTime;
///
/// let config = RecognizerConfig::default();
/// assert_eq!(config.default_due_time.to_string(), "23:59");
///
/// let morning = DueTime::from_hm(9, 0).expect("valid time");
/// let custom = RecognizerConfig::default().with_default_due_time(morning);
/// assert_eq!(custom.default_due_time.to_string(), "09:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecognizerConfig {
    /// Due time stamped on every candidate.
    pub default_due_time: DueTime,
    /// Titles longer than this many characters are cut and suffixed with
    /// `...`.
    pub max_title_chars: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            default_due_time: DueTime::end_of_day(),
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
        }
    }
}

impl RecognizerConfig {
    /// Sets the due time stamped on candidates.
    #[must_use]
    pub const fn with_default_due_time(mut self, due_time: DueTime) -> Self {
        self.default_due_time = due_time;
        self
    }

    /// Sets the title truncation limit.
    #[must_use]
    pub const fn with_max_title_chars(mut self, max_title_chars: usize) -> Self {
        self.max_title_chars = max_title_chars;
        self
    }
}
