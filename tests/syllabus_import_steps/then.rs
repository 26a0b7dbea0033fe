//! Then steps for syllabus import BDD scenarios.

use super::world::{SyllabusImportWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use syllabus_tracker::{
    syllabus::services::ImportError,
    task::{domain::CourseId, ports::TaskStore},
};

#[then("{count:usize} candidates are proposed")]
fn candidates_are_proposed(world: &SyllabusImportWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.candidates()?.len();
    if found != count {
        return Err(eyre::eyre!("expected {count} candidates, found {found}"));
    }
    Ok(())
}

#[then(r#"candidate {position:usize} has title "{title}""#)]
fn candidate_has_title(
    world: &SyllabusImportWorld,
    position: usize,
    title: String,
) -> Result<(), eyre::Report> {
    let candidate = world.candidate(position)?;
    if candidate.title() != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, found {:?}",
            candidate.title()
        ));
    }
    Ok(())
}

#[then(r#"candidate {position:usize} is due "{date}" in week {week:u32}"#)]
fn candidate_is_due_in_week(
    world: &SyllabusImportWorld,
    position: usize,
    date: String,
    week: u32,
) -> Result<(), eyre::Report> {
    let candidate = world.candidate(position)?;
    let due = candidate.due_date().map(|due| due.to_string());
    if due.as_deref() != Some(date.as_str()) {
        return Err(eyre::eyre!("expected due date {date}, found {due:?}"));
    }
    if candidate.week_number() != Some(week) {
        return Err(eyre::eyre!(
            "expected week {week}, found {:?}",
            candidate.week_number()
        ));
    }
    Ok(())
}

#[then(r#"candidate {position:usize} has confidence "{confidence}""#)]
fn candidate_has_confidence(
    world: &SyllabusImportWorld,
    position: usize,
    confidence: String,
) -> Result<(), eyre::Report> {
    let found = world.candidate(position)?.confidence();
    if found.as_str() != confidence {
        return Err(eyre::eyre!("expected {confidence} confidence, found {found}"));
    }
    Ok(())
}

#[then("candidate {position:usize} has no due date")]
fn candidate_has_no_due_date(
    world: &SyllabusImportWorld,
    position: usize,
) -> Result<(), eyre::Report> {
    if let Some(due) = world.candidate(position)?.due_date() {
        return Err(eyre::eyre!("expected no due date, found {due}"));
    }
    Ok(())
}

#[then("the store holds {count:usize} tasks")]
fn store_holds_tasks(world: &SyllabusImportWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = run_async(world.store.list()).wrap_err("list stored tasks")?;
    if stored.len() != count {
        return Err(eyre::eyre!("expected {count} stored tasks, found {}", stored.len()));
    }
    if stored != world.approved {
        return Err(eyre::eyre!("stored tasks differ from the approved tasks"));
    }
    Ok(())
}

#[then(r#"every stored task is approved for course "{course_id}""#)]
fn stored_tasks_are_approved(
    world: &SyllabusImportWorld,
    course_id: String,
) -> Result<(), eyre::Report> {
    let course = CourseId::new(course_id);
    let stored = run_async(world.store.list()).wrap_err("list stored tasks")?;
    if let Some(task) = stored
        .iter()
        .find(|task| !task.is_approved() || task.course_id() != Some(&course))
    {
        return Err(eyre::eyre!("task {} is not an approved {course} task", task.id()));
    }
    Ok(())
}

#[then("recognition fails because no course is selected")]
fn recognition_fails_without_course(world: &SyllabusImportWorld) -> Result<(), eyre::Report> {
    match world.recognition.as_ref() {
        Some(Err(ImportError::MissingCourse)) => Ok(()),
        other => Err(eyre::eyre!("expected missing course error, got {other:?}")),
    }
}

#[then("recognition fails because the syllabus is empty")]
fn recognition_fails_for_empty_syllabus(world: &SyllabusImportWorld) -> Result<(), eyre::Report> {
    match world.recognition.as_ref() {
        Some(Err(ImportError::EmptySyllabus)) => Ok(()),
        other => Err(eyre::eyre!("expected empty syllabus error, got {other:?}")),
    }
}
