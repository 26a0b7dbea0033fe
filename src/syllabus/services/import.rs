//! Service layer for syllabus import: recognition, review selection and
//! approval into the task store.

use crate::syllabus::domain::{CandidateTask, RecognizerConfig, SyllabusRecognizer};
use crate::task::{
    domain::{CourseId, Task, TaskId},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for recognizing a pasted syllabus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSyllabusRequest {
    course_id: CourseId,
    text: String,
}

impl ImportSyllabusRequest {
    /// Creates a request for the given course and raw text.
    #[must_use]
    pub fn new(course_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            course_id: CourseId::new(course_id),
            text: text.into(),
        }
    }

    /// Returns the target course.
    #[must_use]
    pub const fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    /// Returns the raw syllabus text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Candidates chosen during review.
///
/// # Examples
///
/// ```
/// use syllabus_tracker::syllabus::services::CandidateSelection;
/// use syllabus_tracker::task::domain::TaskId;
///
/// let id = TaskId::new();
/// let mut selection = CandidateSelection::default();
/// assert!(selection.toggle(id));
/// assert!(selection.contains(id));
/// assert!(!selection.toggle(id));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSelection {
    selected: HashSet<TaskId>,
}

impl CandidateSelection {
    /// Selects every candidate, as the review screen does initially.
    #[must_use]
    pub fn all(candidates: &[CandidateTask]) -> Self {
        Self {
            selected: candidates.iter().map(CandidateTask::id).collect(),
        }
    }

    /// Flips the selection of `id` and returns whether it is now selected.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id)
        }
    }

    /// Returns `true` when `id` is selected.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.selected.contains(&id)
    }

    /// Returns the number of selected candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Service-level errors for syllabus import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The pasted text is empty or whitespace.
    #[error("syllabus text is empty")]
    EmptySyllabus,
    /// No course was chosen for the import.
    #[error("a course must be selected before importing a syllabus")]
    MissingCourse,
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for syllabus import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Syllabus import orchestration service.
#[derive(Clone)]
pub struct SyllabusImportService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    recognizer: SyllabusRecognizer,
}

impl<S, C> SyllabusImportService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new import service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, config: RecognizerConfig) -> Self {
        Self {
            store,
            clock,
            recognizer: SyllabusRecognizer::new(config),
        }
    }

    /// Recognizes candidate tasks in the request's text.
    ///
    /// Nothing is stored; candidates wait for [`Self::approve`].
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::EmptySyllabus`] for blank text and
    /// [`ImportError::MissingCourse`] for a blank course identifier.
    pub fn recognize(&self, request: &ImportSyllabusRequest) -> ImportResult<Vec<CandidateTask>> {
        if request.text.trim().is_empty() {
            return Err(ImportError::EmptySyllabus);
        }
        if request.course_id.is_blank() {
            return Err(ImportError::MissingCourse);
        }
        Ok(self
            .recognizer
            .recognize(&request.text, &request.course_id, &*self.clock))
    }

    /// Appends the selected candidates to the task store.
    ///
    /// Selected candidates keep their order and identifiers, are marked
    /// approved, and get the configured due time when theirs is unset.
    /// Existing tasks are left untouched; duplicates of earlier imports are
    /// not detected. Tasks appended before a store failure stay stored.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Store`] when the store rejects a task.
    pub async fn approve(
        &self,
        candidates: Vec<CandidateTask>,
        selection: &CandidateSelection,
    ) -> ImportResult<Vec<Task>> {
        let default_due_time = self.recognizer.config().default_due_time;
        let mut approved = Vec::with_capacity(selection.len());
        for candidate in candidates {
            if !selection.contains(candidate.id()) {
                debug!(id = %candidate.id(), "candidate not selected");
                continue;
            }
            let task = candidate.into_approved_task(default_due_time);
            self.store.append(&task).await?;
            approved.push(task);
        }

        info!(count = approved.len(), "syllabus candidates imported");
        Ok(approved)
    }
}
