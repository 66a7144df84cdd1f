//! Weekly planning domain shared by `server`, `client` and `cli`.
//!
//! This crate owns the planner form model that the browser edits, the
//! field-naming contract of the submitted form, and the block scheduler that
//! turns a decoded submission into a timetable. It performs no I/O.

pub mod clock;
pub mod demo;
pub mod fields;
pub mod form;
pub mod model;
pub mod palette;
pub mod solver;
pub mod stats;
pub mod submission;
pub mod timetable;
pub mod weekday;

pub use clock::{ClockError, ClockTime, SLOT_MINUTES, SlotGrid};
pub use form::{ConstraintRow, ConstraintViolation, FieldError, PlannerForm, ProjectRow, TimeBounds};
pub use model::{FixedConstraint, PlanRequest, Project};
pub use solver::{Placement, Schedule, SolveError, SolveStatus, SolverConfig, schedule_blocks};
pub use stats::{ProjectStats, project_statistics};
pub use submission::{SubmissionError, decode};
pub use timetable::Timetable;
pub use weekday::{Weekday, WeekdayError};

use serde::{Deserialize, Serialize};

/// Everything a caller needs to present one solved plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub status: SolveStatus,
    pub timetable: Timetable,
    pub stats: Vec<ProjectStats>,
    /// Label -> RGB, for colouring timetable cells.
    pub colours: Vec<(String, [u8; 3])>,
}

/// Solve a decoded request and assemble timetable, statistics and colours.
///
/// # Errors
///
/// Propagates [`SolveError`] when a fixed constraint cannot be placed on the
/// slot grid.
pub fn plan(request: &PlanRequest, config: &SolverConfig) -> Result<PlanOutcome, SolveError> {
    let schedule = schedule_blocks(request, config)?;
    let timetable = Timetable::build(request, &schedule);
    let stats = if schedule.status.has_solution() {
        project_statistics(&request.projects, &timetable)
    } else {
        Vec::new()
    };
    let colours = palette::colours(request.labels());
    Ok(PlanOutcome { status: schedule.status, timetable, stats, colours })
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
