//! Application services over stored tasks.

mod schedule;

pub use schedule::TaskScheduleService;
