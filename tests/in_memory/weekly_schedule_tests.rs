//! In-memory integration tests for weekly views over imported tasks.

use std::sync::Arc;

use super::helpers::{SPRING_SYLLABUS, import_all, import_service, settings, store};
use rstest::rstest;
use syllabus_tracker::{
    config::DashboardSettings,
    task::{adapters::memory::InMemoryTaskStore, domain::CourseId, services::TaskScheduleService},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn imported_tasks_land_in_term_weeks(
    store: Arc<InMemoryTaskStore>,
    settings: Result<DashboardSettings, eyre::Report>,
) -> Result<(), eyre::Report> {
    let settings = settings?;
    let service = import_service(&store, &settings)?;
    import_all(&service, "ml-101", SPRING_SYLLABUS).await?;
    let schedule = TaskScheduleService::new(Arc::clone(&store), settings.term_start);

    let weekly = schedule.weekly_for_course(&CourseId::new("ml-101")).await?;

    let weeks: Vec<(u32, Vec<&str>)> = weekly
        .weeks()
        .map(|(week, tasks)| (week, tasks.iter().map(|task| task.title()).collect()))
        .collect();
    assert_eq!(
        weeks,
        vec![
            (1, vec!["Reading: chapter 1 due"]),
            (2, vec!["Problem Set 1 due"]),
            (3, vec!["Quiz 1 due"]),
        ]
    );
    let unscheduled: Vec<&str> = weekly.unscheduled().iter().map(|task| task.title()).collect();
    assert_eq!(unscheduled, vec!["Project proposal due soon"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_term_start_falls_back_to_calendar_weeks(
    store: Arc<InMemoryTaskStore>,
) -> Result<(), eyre::Report> {
    let settings = DashboardSettings::from_json(r#"{"termStart": ""}"#)?;
    let service = import_service(&store, &settings)?;
    import_all(&service, "ml-101", "Problem Set 1 due Jan 22").await?;
    let schedule = TaskScheduleService::new(Arc::clone(&store), settings.term_start);

    let weekly = schedule.weekly().await?;

    let weeks: Vec<u32> = weekly.weeks().map(|(week, _)| week).collect();
    assert_eq!(weeks, vec![4]);
    Ok(())
}
