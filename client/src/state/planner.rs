#[cfg(test)]
#[path = "planner_test.rs"]
mod planner_test;

use leptos::prelude::*;
use planner::{ClockTime, ConstraintRow, FieldError, PlannerForm, TimeBounds, Weekday};

use crate::util::alert::warn_rejected;

/// Form state on first page load: the work week, 08:00 to 18:00, and one
/// blank project row.
pub fn initial_form() -> PlannerForm {
    let mut form = PlannerForm::default();
    for day in Weekday::WORKWEEK {
        form.set_day_available(day, true);
    }
    form.set_start_time(ClockTime::new(8, 0).ok());
    form.set_end_time(ClockTime::new(18, 0).ok());
    form.add_project();
    form
}

/// Apply one fallible edit to the form signal, logging a refused value.
pub fn edit(form: RwSignal<PlannerForm>, change: impl FnOnce(&mut PlannerForm) -> Result<(), FieldError>) {
    form.update(|f| {
        if let Err(err) = change(f) {
            warn_rejected(&err);
        }
    });
}

/// Value of a `type="time"` input. Empty or malformed input reads as unset.
pub fn parse_time_input(raw: &str) -> Option<ClockTime> {
    let raw = raw.trim();
    if raw.is_empty() { None } else { raw.parse().ok() }
}

/// Apply the blocks-per-week input of project row `index`.
///
/// # Errors
///
/// Returns [`FieldError`] when the row is gone or the number is out of range.
/// Unparseable text is ignored; the browser's own `min`/`required` checks
/// report it on submit.
pub fn apply_blocks_input(form: &mut PlannerForm, index: usize, raw: &str) -> Result<(), FieldError> {
    match raw.trim().parse::<u32>() {
        Ok(blocks) => form.set_blocks_per_week(index, blocks),
        Err(_) => Ok(()),
    }
}

/// Apply the hours-per-block input of project row `index`.
///
/// # Errors
///
/// Same contract as [`apply_blocks_input`].
pub fn apply_hours_input(form: &mut PlannerForm, index: usize, raw: &str) -> Result<(), FieldError> {
    match raw.trim().parse::<f64>() {
        Ok(hours) => form.set_hours_per_block(index, hours),
        Err(_) => Ok(()),
    }
}

/// Apply the day `<select>` of constraint row `index`.
///
/// # Errors
///
/// Returns [`FieldError::UnknownConstraint`] when the row is gone.
pub fn apply_day_input(form: &mut PlannerForm, index: usize, raw: &str) -> Result<(), FieldError> {
    match raw.parse::<Weekday>() {
        Ok(day) => form.set_constraint_day(index, day),
        Err(_) => Ok(()),
    }
}

/// Apply the start-time input of constraint row `index`, keeping its end.
///
/// # Errors
///
/// Returns [`FieldError::UnknownConstraint`] when the row is gone.
pub fn apply_constraint_start(form: &mut PlannerForm, index: usize, raw: &str) -> Result<(), FieldError> {
    let end = constraint_row(form, index)?.end_time;
    form.set_constraint_times(index, parse_time_input(raw), end)
}

/// Apply the end-time input of constraint row `index`, keeping its start.
///
/// # Errors
///
/// Returns [`FieldError::UnknownConstraint`] when the row is gone.
pub fn apply_constraint_end(form: &mut PlannerForm, index: usize, raw: &str) -> Result<(), FieldError> {
    let start = constraint_row(form, index)?.start_time;
    form.set_constraint_times(index, start, parse_time_input(raw))
}

/// Current `min`/`max` of constraint row `index`, if it still exists.
pub fn constraint_bounds(form: &PlannerForm, index: usize) -> Option<TimeBounds> {
    constraint_row(form, index).ok().map(|row| row.bounds)
}

fn constraint_row(form: &PlannerForm, index: usize) -> Result<&ConstraintRow, FieldError> {
    form.constraints()
        .iter()
        .find(|row| row.index == index)
        .ok_or(FieldError::UnknownConstraint(index))
}
