//! Domain model for syllabus text extraction.
//!
//! Date fragments are normalized to canonical dates and assignment lines are
//! turned into review candidates. Everything here is pure apart from
//! identifier generation and the clock read for the current year.

mod candidate;
mod config;
mod date;
mod recognizer;

pub use candidate::{CandidateDraft, CandidateTask, Confidence};
pub use config::{DEFAULT_MAX_TITLE_CHARS, RecognizerConfig};
pub use date::{DateForm, normalize_date, normalize_date_in_year};
pub use recognizer::SyllabusRecognizer;
