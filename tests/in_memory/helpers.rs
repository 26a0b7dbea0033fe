//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use crate::test_helpers::FixedClock;
use rstest::fixture;
use syllabus_tracker::{
    config::DashboardSettings,
    syllabus::services::{CandidateSelection, ImportSyllabusRequest, SyllabusImportService},
    task::{adapters::memory::InMemoryTaskStore, domain::Task},
};

/// Import service wired to the in-memory store and a fixed clock.
pub type TestImportService = SyllabusImportService<InMemoryTaskStore, FixedClock>;

/// Syllabus excerpt spanning the first weeks of the spring 2026 term.
pub const SPRING_SYLLABUS: &str = "\
Machine Learning (ML-101), Spring 2026
Week 1
Reading: chapter 1 due Jan 15
Week 2
Problem Set 1 due Jan 22
Lecture: gradient descent
Week 3
Quiz 1 due 1/29
Project proposal due soon
";

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::new())
}

/// Provides the dashboard's default settings for the spring 2026 term.
///
/// # Errors
///
/// Returns an error if the settings document fails to parse.
#[fixture]
pub fn settings() -> Result<DashboardSettings, eyre::Report> {
    Ok(DashboardSettings::from_json(
        r#"{"termName": "Spring 2026", "termStart": "2026-01-13", "defaultDueTime": "23:59"}"#,
    )?)
}

/// Builds an import service over `store` with a clock in term time.
///
/// # Errors
///
/// Returns an error if the fixed clock cannot be built.
pub fn import_service(
    store: &Arc<InMemoryTaskStore>,
    settings: &DashboardSettings,
) -> Result<TestImportService, eyre::Report> {
    Ok(SyllabusImportService::new(
        Arc::clone(store),
        Arc::new(FixedClock::on(2026, 1, 10)?),
        settings.recognizer_config(),
    ))
}

/// Recognizes `text` for `course` and approves every candidate.
///
/// # Errors
///
/// Returns an error if recognition or approval fails.
pub async fn import_all(
    service: &TestImportService,
    course: &str,
    text: &str,
) -> Result<Vec<Task>, eyre::Report> {
    let candidates = service.recognize(&ImportSyllabusRequest::new(course, text))?;
    let selection = CandidateSelection::all(&candidates);
    Ok(service.approve(candidates, &selection).await?)
}
