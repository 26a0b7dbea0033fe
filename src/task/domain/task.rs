//! Task record stored by the dashboard.

use super::{
    CanonicalDate, CourseId, DueTime, TaskCategory, TaskId, TaskKind, TaskSource, TaskStatus,
    due::empty_as_none,
};
use serde::{Deserialize, Serialize};

/// Task record held in the task store.
///
/// Field names serialize in camelCase to match the dashboard's backup JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(rename = "type")]
    kind: TaskKind,
    course_id: Option<CourseId>,
    category: TaskCategory,
    #[serde(default, with = "empty_as_none")]
    due_date: Option<CanonicalDate>,
    #[serde(default, with = "empty_as_none")]
    due_time: Option<DueTime>,
    status: TaskStatus,
    completed: bool,
    #[serde(default)]
    notes: String,
    source: TaskSource,
    #[serde(default)]
    week_number: Option<u32>,
    #[serde(default)]
    approved: bool,
}

/// Parameter object for building a task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Display title.
    pub title: String,
    /// Kind of work item.
    pub kind: TaskKind,
    /// Owning course, if any.
    pub course_id: Option<CourseId>,
    /// Life-area category.
    pub category: TaskCategory,
    /// Due date, if known.
    pub due_date: Option<CanonicalDate>,
    /// Due time, if known.
    pub due_time: Option<DueTime>,
    /// Progress state.
    pub status: TaskStatus,
    /// Free-form notes.
    pub notes: String,
    /// Record provenance.
    pub source: TaskSource,
    /// Syllabus week the task was listed under.
    pub week_number: Option<u32>,
    /// Whether the record passed syllabus review.
    pub approved: bool,
}

impl Task {
    /// Reconstructs a task from its stored fields.
    ///
    /// `completed` is derived from the status so the two cannot disagree.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            kind: data.kind,
            course_id: data.course_id,
            category: data.category,
            due_date: data.due_date,
            due_time: data.due_time,
            status: data.status,
            completed: data.status.is_done(),
            notes: data.notes,
            source: data.source,
            week_number: data.week_number,
            approved: data.approved,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the kind of work item.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the owning course, if any.
    #[must_use]
    pub const fn course_id(&self) -> Option<&CourseId> {
        self.course_id.as_ref()
    }

    /// Returns the life-area category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Returns the due date, if known.
    #[must_use]
    pub const fn due_date(&self) -> Option<CanonicalDate> {
        self.due_date
    }

    /// Returns the due time, if known.
    #[must_use]
    pub const fn due_time(&self) -> Option<DueTime> {
        self.due_time
    }

    /// Returns the progress state.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns `true` when the task is finished.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the free-form notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the record provenance.
    #[must_use]
    pub const fn source(&self) -> TaskSource {
        self.source
    }

    /// Returns the syllabus week the task was listed under.
    #[must_use]
    pub const fn week_number(&self) -> Option<u32> {
        self.week_number
    }

    /// Returns `true` when the record passed syllabus review.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.approved
    }
}
