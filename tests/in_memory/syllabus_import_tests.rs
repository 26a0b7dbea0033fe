//! In-memory integration tests for syllabus import.

use std::sync::Arc;

use super::helpers::{SPRING_SYLLABUS, import_all, import_service, settings, store};
use rstest::rstest;
use syllabus_tracker::{
    config::DashboardSettings,
    syllabus::{
        domain::Confidence,
        services::{CandidateSelection, ImportSyllabusRequest},
    },
    task::{
        adapters::memory::InMemoryTaskStore,
        domain::{CourseId, DueTime, TaskKind, TaskSource},
        ports::TaskStore,
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_import_stores_reviewed_tasks(
    store: Arc<InMemoryTaskStore>,
    settings: Result<DashboardSettings, eyre::Report>,
) -> Result<(), eyre::Report> {
    let service = import_service(&store, &settings?)?;

    let approved = import_all(&service, "ml-101", SPRING_SYLLABUS).await?;

    let summary: Vec<(&str, Option<String>, Option<u32>)> = approved
        .iter()
        .map(|task| {
            (
                task.title(),
                task.due_date().map(|date| date.to_string()),
                task.week_number(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Reading: chapter 1 due", Some("2026-01-15".to_owned()), Some(1)),
            ("Problem Set 1 due", Some("2026-01-22".to_owned()), Some(2)),
            ("Quiz 1 due", Some("2026-01-29".to_owned()), Some(3)),
            ("Project proposal due soon", None, Some(3)),
        ]
    );
    assert!(approved.iter().all(|task| task.kind() == TaskKind::SyllabusAssignment));
    assert!(approved.iter().all(|task| task.source() == TaskSource::Syllabus));
    assert_eq!(store.list().await?, approved);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn review_reflects_confidence_before_approval(
    store: Arc<InMemoryTaskStore>,
    settings: Result<DashboardSettings, eyre::Report>,
) -> Result<(), eyre::Report> {
    let service = import_service(&store, &settings?)?;

    let candidates =
        service.recognize(&ImportSyllabusRequest::new("ml-101", SPRING_SYLLABUS))?;

    let low: Vec<&str> = candidates
        .iter()
        .filter(|candidate| candidate.confidence() == Confidence::Low)
        .map(|candidate| candidate.title())
        .collect();
    assert_eq!(low, vec!["Project proposal due soon"]);
    assert!(store.list().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn settings_due_time_applies_to_imported_tasks(
    store: Arc<InMemoryTaskStore>,
) -> Result<(), eyre::Report> {
    let settings = DashboardSettings::from_json(r#"{"defaultDueTime": "17:00"}"#)?;
    let service = import_service(&store, &settings)?;
    let candidates: Vec<_> = service
        .recognize(&ImportSyllabusRequest::new("ml-101", "Lab 1 due 2/3\nLab 2 due 2/10"))?
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            if index == 0 {
                candidate
            } else {
                candidate.without_due_time()
            }
        })
        .collect();
    let selection = CandidateSelection::all(&candidates);

    let approved = service.approve(candidates, &selection).await?;

    let five_pm = DueTime::from_hm(17, 0);
    assert!(approved.iter().all(|task| task.due_time() == five_pm));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn imports_for_two_courses_stay_separate(
    store: Arc<InMemoryTaskStore>,
    settings: Result<DashboardSettings, eyre::Report>,
) -> Result<(), eyre::Report> {
    let service = import_service(&store, &settings?)?;

    import_all(&service, "ml-101", SPRING_SYLLABUS).await?;
    import_all(&service, "hist-200", "Week 4\nEssay due Feb 6").await?;

    let history = store.list_by_course(&CourseId::new("hist-200")).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(store.list_by_course(&CourseId::new("ml-101")).await?.len(), 4);
    assert_eq!(store.list().await?.len(), 5);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_import_is_not_deduplicated(
    store: Arc<InMemoryTaskStore>,
    settings: Result<DashboardSettings, eyre::Report>,
) -> Result<(), eyre::Report> {
    let service = import_service(&store, &settings?)?;

    let first = import_all(&service, "ml-101", SPRING_SYLLABUS).await?;
    let second = import_all(&service, "ml-101", SPRING_SYLLABUS).await?;

    assert_eq!(store.list().await?.len(), first.len() + second.len());
    assert!(
        first
            .iter()
            .zip(&second)
            .all(|(left, right)| left.id() != right.id() && left.title() == right.title())
    );
    Ok(())
}
