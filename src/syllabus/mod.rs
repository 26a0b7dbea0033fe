//! Syllabus text extraction.
//!
//! Pasted syllabus text is scanned line by line for assignment mentions.
//! Each mention becomes a [`domain::CandidateTask`] with a normalized due
//! date when one can be found, and a confidence flag saying whether it was.
//! Candidates are reviewed by the user and the chosen ones are appended to
//! the task store. The module follows hexagonal architecture:
//!
//! - Date normalization and line recognition in [`domain`]
//! - Review and approval orchestration in [`services`]
//!
//! Persistence goes through [`crate::task::ports::TaskStore`].

pub mod domain;
pub mod services;
