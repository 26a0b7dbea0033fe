//! Enumerated task fields and their stored string forms.
//!
//! Stored forms match the dashboard's JSON backups so records round-trip
//! unchanged.

use super::ParseTaskFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// Assignment extracted from a course syllabus.
    #[serde(rename = "Syllabus Assignment")]
    SyllabusAssignment,
    /// Assigned reading.
    #[serde(rename = "Reading")]
    Reading,
    /// Todo entered by hand.
    #[serde(rename = "Manual Todo")]
    ManualTodo,
}

impl TaskKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SyllabusAssignment => "Syllabus Assignment",
            Self::Reading => "Reading",
            Self::ManualTodo => "Manual Todo",
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "syllabus assignment" => Ok(Self::SyllabusAssignment),
            "reading" => Ok(Self::Reading),
            "manual todo" => Ok(Self::ManualTodo),
            _ => Err(ParseTaskFieldError::new("type", value)),
        }
    }
}

/// Life area a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskCategory {
    /// Coursework.
    #[serde(rename = "Class")]
    Class,
    /// Research programme work.
    #[serde(rename = "MATS")]
    Mats,
    /// Personal errands.
    #[serde(rename = "Personal")]
    Personal,
    /// Administrative chores.
    #[serde(rename = "Admin")]
    Admin,
    /// Health and fitness.
    #[serde(rename = "Health")]
    Health,
}

impl TaskCategory {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Mats => "MATS",
            Self::Personal => "Personal",
            Self::Admin => "Admin",
            Self::Health => "Health",
        }
    }
}

impl TryFrom<&str> for TaskCategory {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "class" => Ok(Self::Class),
            "mats" => Ok(Self::Mats),
            "personal" => Ok(Self::Personal),
            "admin" => Ok(Self::Admin),
            "health" => Ok(Self::Health),
            _ => Err(ParseTaskFieldError::new("category", value)),
        }
    }
}

/// Progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "Not started")]
    NotStarted,
    /// Work is under way.
    #[serde(rename = "In progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    /// Returns `true` for the finished state.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not started" => Ok(Self::NotStarted),
            "in progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskFieldError::new("status", value)),
        }
    }
}

/// Where a task record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskSource {
    /// Extracted from a syllabus and approved by the user.
    #[serde(rename = "Syllabus")]
    Syllabus,
    /// Entered by hand.
    #[serde(rename = "Manual")]
    Manual,
}

impl TaskSource {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syllabus => "Syllabus",
            Self::Manual => "Manual",
        }
    }
}

impl TryFrom<&str> for TaskSource {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "syllabus" => Ok(Self::Syllabus),
            "manual" => Ok(Self::Manual),
            _ => Err(ParseTaskFieldError::new("source", value)),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaskSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
