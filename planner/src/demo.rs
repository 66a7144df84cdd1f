//! Built-in sample week, used by `weekplan demo` and as a test fixture.

use crate::clock::ClockTime;
use crate::model::{FixedConstraint, PlanRequest, Project};
use crate::weekday::Weekday;

const fn at(hour: u16, minute: u16) -> ClockTime {
    ClockTime::from_hm(hour, minute)
}

fn project(name: &str, hours_per_block: f64, blocks_per_week: u32) -> Project {
    Project { name: name.to_owned(), blocks_per_week, hours_per_block }
}

fn constraint(name: &str, day: Weekday, start: ClockTime, end: ClockTime) -> FixedConstraint {
    FixedConstraint { name: name.to_owned(), day, start_time: start, end_time: end }
}

/// A Monday-to-Friday, 08:00-18:00 week with six projects, a daily lunch
/// break and two writing-group sessions.
#[must_use]
pub fn sample_week() -> PlanRequest {
    let mut constraints: Vec<FixedConstraint> = Weekday::WORKWEEK
        .into_iter()
        .map(|day| constraint("Lunch break", day, at(13, 0), at(13, 30)))
        .collect();
    constraints.push(constraint("Writing group", Weekday::Tuesday, at(14, 0), at(17, 0)));
    constraints.push(constraint("Writing group", Weekday::Thursday, at(9, 0), at(13, 0)));

    PlanRequest {
        available_days: Weekday::WORKWEEK.to_vec(),
        start_time: at(8, 0),
        end_time: at(18, 0),
        projects: vec![
            project("Gym", 1.0, 3),
            project("Job Hunt", 2.0, 5),
            project("Analyst work", 2.0, 5),
            project("Write", 2.0, 3),
            project("Read", 1.0, 3),
            project("AI training", 2.0, 2),
        ],
        constraints,
    }
}
