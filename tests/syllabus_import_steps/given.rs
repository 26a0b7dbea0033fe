//! Given steps for syllabus import BDD scenarios.

use super::world::SyllabusImportWorld;
use rstest_bdd_macros::given;

#[given(r#"a syllabus for course "{course_id}""#)]
fn syllabus_for_course(world: &mut SyllabusImportWorld, course_id: String) {
    world.course_id = course_id;
}

#[given("a syllabus with no course")]
fn syllabus_without_course(world: &mut SyllabusImportWorld) {
    world.course_id.clear();
}

#[given(r#"the syllabus line "{line}""#)]
fn syllabus_line(world: &mut SyllabusImportWorld, line: String) {
    world.lines.push(line);
}
