//! Step definitions for syllabus import scenarios.

mod given;
mod then;
