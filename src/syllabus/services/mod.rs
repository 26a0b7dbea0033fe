//! Application services for syllabus import.

mod import;

pub use import::{
    CandidateSelection, ImportError, ImportResult, ImportSyllabusRequest, SyllabusImportService,
};
