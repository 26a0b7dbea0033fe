//! Machine-extracted task candidates awaiting review.

use crate::task::domain::{
    CanonicalDate, CourseId, DueTime, PersistedTaskData, Task, TaskCategory, TaskId, TaskKind,
    TaskSource, TaskStatus, empty_as_none,
};
use serde::Serialize;
use std::fmt;

/// Quality signal for an extracted candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Confidence {
    /// A date fragment was found and normalized.
    High,
    /// No usable due date was found.
    Low,
}

impl Confidence {
    /// Derives the confidence from the resolved due date.
    #[must_use]
    pub const fn for_due_date(due_date: Option<&CanonicalDate>) -> Self {
        if due_date.is_some() {
            Self::High
        } else {
            Self::Low
        }
    }

    /// Returns the canonical display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values recognized from one syllabus line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDraft {
    /// Cleaned assignment description.
    pub title: String,
    /// Course the syllabus belongs to.
    pub course_id: CourseId,
    /// Resolved due date, if any.
    pub due_date: Option<CanonicalDate>,
    /// Due time applied to the candidate.
    pub due_time: DueTime,
    /// Most recent week header seen before the line.
    pub week_number: Option<u32>,
    /// Source line, verbatim.
    pub original_line: String,
}

/// Unapproved task extracted from syllabus text.
///
/// The confidence is derived from the due date on construction, so a
/// candidate is `High` exactly when it carries a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTask {
    id: TaskId,
    title: String,
    #[serde(rename = "type")]
    kind: TaskKind,
    course_id: CourseId,
    category: TaskCategory,
    #[serde(serialize_with = "empty_as_none::serialize")]
    due_date: Option<CanonicalDate>,
    #[serde(serialize_with = "empty_as_none::serialize")]
    due_time: Option<DueTime>,
    status: TaskStatus,
    completed: bool,
    notes: String,
    source: TaskSource,
    week_number: Option<u32>,
    confidence: Confidence,
    original_line: String,
    approved: bool,
}

impl CandidateTask {
    /// Creates a candidate with a fresh identifier and the fixed syllabus
    /// provenance fields.
    #[must_use]
    pub fn new(draft: CandidateDraft) -> Self {
        let confidence = Confidence::for_due_date(draft.due_date.as_ref());
        Self {
            id: TaskId::new(),
            title: draft.title,
            kind: TaskKind::SyllabusAssignment,
            course_id: draft.course_id,
            category: TaskCategory::Class,
            due_date: draft.due_date,
            due_time: Some(draft.due_time),
            status: TaskStatus::NotStarted,
            completed: false,
            notes: String::new(),
            source: TaskSource::Syllabus,
            week_number: draft.week_number,
            confidence,
            original_line: draft.original_line,
            approved: false,
        }
    }

    /// Returns the candidate identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the cleaned title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the kind of work item.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the course the candidate belongs to.
    #[must_use]
    pub const fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Returns the resolved due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<CanonicalDate> {
        self.due_date
    }

    /// Returns the due time, if set.
    #[must_use]
    pub const fn due_time(&self) -> Option<DueTime> {
        self.due_time
    }

    /// Returns the initial progress state.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns `true` when the candidate is marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the provenance tag.
    #[must_use]
    pub const fn source(&self) -> TaskSource {
        self.source
    }

    /// Returns the week the candidate was listed under.
    #[must_use]
    pub const fn week_number(&self) -> Option<u32> {
        self.week_number
    }

    /// Returns the extraction confidence.
    #[must_use]
    pub const fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Returns the source line the candidate came from.
    #[must_use]
    pub fn original_line(&self) -> &str {
        &self.original_line
    }

    /// Returns `true` once the candidate has been approved.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.approved
    }

    /// Clears the due time so the approval step applies its default.
    #[must_use]
    pub fn without_due_time(mut self) -> Self {
        self.due_time = None;
        self
    }

    /// Converts an approved candidate into a stored task record.
    ///
    /// The record keeps the candidate's identifier; an unset due time falls
    /// back to `default_due_time`.
    #[must_use]
    pub fn into_approved_task(self, default_due_time: DueTime) -> Task {
        Task::from_persisted(PersistedTaskData {
            id: self.id,
            title: self.title,
            kind: self.kind,
            course_id: Some(self.course_id),
            category: self.category,
            due_date: self.due_date,
            due_time: Some(self.due_time.unwrap_or(default_due_time)),
            status: self.status,
            notes: self.notes,
            source: self.source,
            week_number: self.week_number,
            approved: true,
        })
    }
}
