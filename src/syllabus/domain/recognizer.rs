//! Line-oriented recognition of assignments in pasted syllabus text.

use super::{
    CandidateDraft, CandidateTask, RecognizerConfig,
    date::{find_inline_fragment, normalize_date_in_year},
};
use crate::task::domain::CourseId;
use chrono::Datelike;
use mockable::Clock;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static WEEK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)week\s*([0-9]+)").expect("valid week header regex")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static ASSIGNMENT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:assignment|problem\s*set|ps[0-9]*|homework|hw|quiz|midterm|final",
        r"|exam|project|paper|essay|lab|reading|due|submit)\b",
    ))
    .expect("valid assignment keyword regex")
});

const ELLIPSIS: &str = "...";

/// How a single non-blank line is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// Sets the running week; `None` when the number does not fit a `u32`.
    WeekHeader(Option<u32>),
    /// Mentions an assignment keyword.
    Assignment,
    /// Anything else.
    Unrelated,
}

fn classify_line(line: &str) -> LineKind {
    if let Some(captures) = WEEK_HEADER.captures(line) {
        let week = captures
            .get(1)
            .and_then(|digits| digits.as_str().parse::<u32>().ok());
        return LineKind::WeekHeader(week);
    }
    if ASSIGNMENT_KEYWORD.is_match(line) {
        LineKind::Assignment
    } else {
        LineKind::Unrelated
    }
}

/// Extracts candidate tasks from free-form syllabus text.
///
/// Recognition is a single left-to-right pass; the only state carried
/// between lines is the most recent week header.
#[derive(Debug, Clone, Default)]
pub struct SyllabusRecognizer {
    config: RecognizerConfig,
}

impl SyllabusRecognizer {
    /// Creates a recognizer with the given configuration.
    #[must_use]
    pub const fn new(config: RecognizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Recognizes candidates, resolving year-less dates against the clock's
    /// current local year.
    #[must_use]
    pub fn recognize(
        &self,
        text: &str,
        course_id: &CourseId,
        clock: &impl Clock,
    ) -> Vec<CandidateTask> {
        self.recognize_in_year(text, course_id, clock.local().year())
    }

    /// Recognizes candidates, resolving year-less dates against `year`.
    ///
    /// Candidates come back in line order. Blank lines, week headers and
    /// lines without an assignment keyword produce nothing.
    #[must_use]
    pub fn recognize_in_year(
        &self,
        text: &str,
        course_id: &CourseId,
        year: i32,
    ) -> Vec<CandidateTask> {
        let mut current_week: Option<u32> = None;
        let candidates: Vec<CandidateTask> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match classify_line(line) {
                LineKind::WeekHeader(week) => {
                    debug!(line, ?week, "week header");
                    current_week = week;
                    None
                }
                LineKind::Assignment => {
                    self.candidate_from_line(line, course_id, current_week, year)
                }
                LineKind::Unrelated => None,
            })
            .collect();

        debug!(
            course_id = course_id.as_str(),
            count = candidates.len(),
            "syllabus recognized"
        );
        candidates
    }

    fn candidate_from_line(
        &self,
        line: &str,
        course_id: &CourseId,
        week_number: Option<u32>,
        year: i32,
    ) -> Option<CandidateTask> {
        let trimmed = line.trim();
        let fragment = find_inline_fragment(trimmed);
        let due_date = fragment.and_then(|found| normalize_date_in_year(found.as_str(), year));
        let without_date = fragment.map_or_else(
            || trimmed.to_owned(),
            |found| trimmed.replacen(found.as_str(), "", 1),
        );

        let title = clean_title(&without_date, self.config.max_title_chars);
        if title.is_empty() {
            debug!(line, "skipped line with no title text");
            return None;
        }

        debug!(line, %title, has_date = due_date.is_some(), "candidate recognized");
        Some(CandidateTask::new(CandidateDraft {
            title,
            course_id: course_id.clone(),
            due_date,
            due_time: self.config.default_due_time,
            week_number,
            original_line: line.to_owned(),
        }))
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Strips non-word characters from both ends and truncates to
/// `max_chars`, appending an ellipsis when cut.
fn clean_title(text: &str, max_chars: usize) -> String {
    let stripped = text.trim_matches(|ch: char| !is_word_char(ch));
    if stripped.chars().count() <= max_chars {
        return stripped.to_owned();
    }
    let mut truncated: String = stripped.chars().take(max_chars).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
