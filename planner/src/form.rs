//! Planner form model: the rows the user edits before submitting.
//!
//! DESIGN
//! ======
//! The page never mutates table markup directly. It holds one `PlannerForm`
//! and re-renders from it. Each row carries a stable `index`, taken from a
//! counter that only grows. That index appears in the row's field names
//! (`projects[{index}][name]`), so removing a row leaves gaps in the
//! submitted indices. The other rows are never renumbered.
//!
//! Constraint rows carry the min/max bounds of their time pickers. Changing
//! the global window rewrites those bounds on every constraint row.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::fields::{self, ConstraintField, ProjectField};
use crate::model::PlanRequest;
use crate::weekday::Weekday;

pub const DEFAULT_BLOCKS_PER_WEEK: u32 = 3;
pub const DEFAULT_HOURS_PER_BLOCK: f64 = 1.0;
pub const MIN_HOURS_PER_BLOCK: f64 = 0.5;
pub const MAX_HOURS_PER_BLOCK: f64 = 24.0;

// =============================================================================
// ERRORS
// =============================================================================

/// A field value the corresponding HTML input would refuse.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("no project row with index {0}")]
    UnknownProject(usize),
    #[error("no constraint row with index {0}")]
    UnknownConstraint(usize),
    #[error("blocks per week must be at least 1 (got {0})")]
    BlocksPerWeek(u32),
    #[error("hours per block must be between 0.5 and 24 in half-hour steps (got {0})")]
    HoursPerBlock(f64),
}

/// First constraint that fails pre-submit validation. The message is what
/// the page shows in its blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    #[error("Constraint on {day} is not allowed. Please choose an available day.")]
    DayUnavailable { index: usize, day: Weekday },
    #[error("Constraint from {start} to {end} is out of the available time range ({window_start} to {window_end}).")]
    OutsideWindow { index: usize, start: String, end: String, window_start: String, window_end: String },
}

impl ConstraintViolation {
    /// Index of the offending constraint row.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::DayUnavailable { index, .. } | Self::OutsideWindow { index, .. } => *index,
        }
    }
}

// =============================================================================
// ROWS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub index: usize,
    pub name: String,
    pub blocks_per_week: u32,
    pub hours_per_block: f64,
}

impl ProjectRow {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            name: String::new(),
            blocks_per_week: DEFAULT_BLOCKS_PER_WEEK,
            hours_per_block: DEFAULT_HOURS_PER_BLOCK,
        }
    }

    #[must_use]
    pub fn field_name(&self, field: ProjectField) -> String {
        fields::project_field(self.index, field)
    }
}

/// `min`/`max` attributes of a constraint's time pickers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBounds {
    pub min: Option<ClockTime>,
    pub max: Option<ClockTime>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintRow {
    pub index: usize,
    pub day: Weekday,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub name: String,
    /// Shared by the start and end inputs of this row.
    pub bounds: TimeBounds,
}

impl ConstraintRow {
    #[must_use]
    pub fn new(index: usize, bounds: TimeBounds) -> Self {
        Self { index, day: Weekday::default(), start_time: None, end_time: None, name: String::new(), bounds }
    }

    #[must_use]
    pub fn field_name(&self, field: ConstraintField) -> String {
        fields::constraint_field(self.index, field)
    }
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerForm {
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub available_days: Vec<Weekday>,
    projects: Vec<ProjectRow>,
    constraints: Vec<ConstraintRow>,
    /// Next project index; submitted as `project_count`.
    project_count: usize,
    /// Next constraint index; submitted as `constraint_count`.
    constraint_count: usize,
}

impl PlannerForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with `request`, rows numbered from zero.
    ///
    /// Values are copied as given, without the setters' range checks.
    #[must_use]
    pub fn from_request(request: &PlanRequest) -> Self {
        let mut form = Self::new();
        form.start_time = Some(request.start_time);
        form.end_time = Some(request.end_time);
        for day in &request.available_days {
            form.set_day_available(*day, true);
        }
        for project in &request.projects {
            let index = form.add_project();
            form.projects[index] = ProjectRow {
                index,
                name: project.name.clone(),
                blocks_per_week: project.blocks_per_week,
                hours_per_block: project.hours_per_block,
            };
        }
        for constraint in &request.constraints {
            let index = form.add_constraint();
            let row = &mut form.constraints[index];
            row.day = constraint.day;
            row.start_time = Some(constraint.start_time);
            row.end_time = Some(constraint.end_time);
            row.name.clone_from(&constraint.name);
        }
        form
    }

    #[must_use]
    pub fn projects(&self) -> &[ProjectRow] {
        &self.projects
    }

    #[must_use]
    pub fn constraints(&self) -> &[ConstraintRow] {
        &self.constraints
    }

    #[must_use]
    pub fn project_count(&self) -> usize {
        self.project_count
    }

    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.constraint_count
    }

    #[must_use]
    pub fn window_bounds(&self) -> TimeBounds {
        TimeBounds { min: self.start_time, max: self.end_time }
    }

    // --- global window -------------------------------------------------------

    /// Set the window start and move every constraint picker's `min` to it.
    pub fn set_start_time(&mut self, time: Option<ClockTime>) {
        self.start_time = time;
        for row in &mut self.constraints {
            row.bounds.min = time;
        }
    }

    /// Set the window end and move every constraint picker's `max` to it.
    pub fn set_end_time(&mut self, time: Option<ClockTime>) {
        self.end_time = time;
        for row in &mut self.constraints {
            row.bounds.max = time;
        }
    }

    /// Check or uncheck one available-day box. Checked days keep week order.
    pub fn set_day_available(&mut self, day: Weekday, available: bool) {
        self.available_days.retain(|d| *d != day);
        if available {
            self.available_days.push(day);
            self.available_days.sort();
        }
    }

    #[must_use]
    pub fn is_day_available(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }

    // --- project rows --------------------------------------------------------

    /// Append a project row with default values and return its index.
    pub fn add_project(&mut self) -> usize {
        let index = self.project_count;
        self.projects.push(ProjectRow::new(index));
        self.project_count += 1;
        index
    }

    /// Remove the project row with `index`. Returns whether a row was removed.
    pub fn remove_project(&mut self, index: usize) -> bool {
        let before = self.projects.len();
        self.projects.retain(|row| row.index != index);
        self.projects.len() != before
    }

    fn project_mut(&mut self, index: usize) -> Result<&mut ProjectRow, FieldError> {
        self.projects
            .iter_mut()
            .find(|row| row.index == index)
            .ok_or(FieldError::UnknownProject(index))
    }

    /// # Errors
    ///
    /// Returns [`FieldError::UnknownProject`] for a missing row.
    pub fn set_project_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), FieldError> {
        self.project_mut(index)?.name = name.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`FieldError::BlocksPerWeek`] for zero, or
    /// [`FieldError::UnknownProject`] for a missing row.
    pub fn set_blocks_per_week(&mut self, index: usize, blocks: u32) -> Result<(), FieldError> {
        if blocks < 1 {
            return Err(FieldError::BlocksPerWeek(blocks));
        }
        self.project_mut(index)?.blocks_per_week = blocks;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`FieldError::HoursPerBlock`] outside `0.5..=24` or off the
    /// half-hour step, or [`FieldError::UnknownProject`] for a missing row.
    pub fn set_hours_per_block(&mut self, index: usize, hours: f64) -> Result<(), FieldError> {
        let on_step = (hours * 2.0).fract() == 0.0;
        if !(MIN_HOURS_PER_BLOCK..=MAX_HOURS_PER_BLOCK).contains(&hours) || !on_step {
            return Err(FieldError::HoursPerBlock(hours));
        }
        self.project_mut(index)?.hours_per_block = hours;
        Ok(())
    }

    // --- constraint rows -----------------------------------------------------

    /// Append a constraint row bounded by the current window and return its index.
    pub fn add_constraint(&mut self) -> usize {
        let index = self.constraint_count;
        let bounds = self.window_bounds();
        self.constraints.push(ConstraintRow::new(index, bounds));
        self.constraint_count += 1;
        index
    }

    /// Remove the constraint row with `index`. Returns whether a row was removed.
    pub fn remove_constraint(&mut self, index: usize) -> bool {
        let before = self.constraints.len();
        self.constraints.retain(|row| row.index != index);
        self.constraints.len() != before
    }

    fn constraint_mut(&mut self, index: usize) -> Result<&mut ConstraintRow, FieldError> {
        self.constraints
            .iter_mut()
            .find(|row| row.index == index)
            .ok_or(FieldError::UnknownConstraint(index))
    }

    /// # Errors
    ///
    /// Returns [`FieldError::UnknownConstraint`] for a missing row.
    pub fn set_constraint_day(&mut self, index: usize, day: Weekday) -> Result<(), FieldError> {
        self.constraint_mut(index)?.day = day;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`FieldError::UnknownConstraint`] for a missing row.
    pub fn set_constraint_times(
        &mut self,
        index: usize,
        start: Option<ClockTime>,
        end: Option<ClockTime>,
    ) -> Result<(), FieldError> {
        let row = self.constraint_mut(index)?;
        row.start_time = start;
        row.end_time = end;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`FieldError::UnknownConstraint`] for a missing row.
    pub fn set_constraint_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), FieldError> {
        self.constraint_mut(index)?.name = name.into();
        Ok(())
    }

    // --- submission ----------------------------------------------------------

    /// Check every constraint row against the available days and the window.
    ///
    /// Rows are checked in display order and the first failure wins. Unset
    /// times order before every time, so an empty constraint start is always
    /// outside the window.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConstraintViolation`] found.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        for row in &self.constraints {
            if !self.is_day_available(row.day) {
                return Err(ConstraintViolation::DayUnavailable { index: row.index, day: row.day });
            }
            if row.start_time < self.start_time || row.end_time > self.end_time {
                return Err(ConstraintViolation::OutsideWindow {
                    index: row.index,
                    start: display_time(row.start_time),
                    end: display_time(row.end_time),
                    window_start: display_time(self.start_time),
                    window_end: display_time(self.end_time),
                });
            }
        }
        Ok(())
    }

    /// The `(name, value)` pairs a browser would submit for this form.
    #[must_use]
    pub fn to_fields(&self) -> Vec<(String, String)> {
        let mut out = vec![
            (fields::START_TIME.to_owned(), display_time(self.start_time)),
            (fields::END_TIME.to_owned(), display_time(self.end_time)),
        ];
        out.extend(
            self.available_days
                .iter()
                .map(|day| (fields::AVAILABLE_DAYS.to_owned(), day.to_string())),
        );
        for row in &self.projects {
            out.push((row.field_name(ProjectField::Name), row.name.clone()));
            out.push((row.field_name(ProjectField::BlocksPerWeek), row.blocks_per_week.to_string()));
            out.push((row.field_name(ProjectField::HoursPerBlock), row.hours_per_block.to_string()));
        }
        for row in &self.constraints {
            out.push((row.field_name(ConstraintField::Day), row.day.to_string()));
            out.push((row.field_name(ConstraintField::StartTime), display_time(row.start_time)));
            out.push((row.field_name(ConstraintField::EndTime), display_time(row.end_time)));
            out.push((row.field_name(ConstraintField::Name), row.name.clone()));
        }
        out.push((fields::PROJECT_COUNT.to_owned(), self.project_count.to_string()));
        out.push((fields::CONSTRAINT_COUNT.to_owned(), self.constraint_count.to_string()));
        out
    }
}

/// Render an optional time the way an empty `<input type="time">` reads.
#[must_use]
pub fn display_time(time: Option<ClockTime>) -> String {
    time.map(|t| t.to_string()).unwrap_or_default()
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
