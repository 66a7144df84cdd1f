//! Decoded plan inputs handed to the solver.

use serde::{Deserialize, Serialize};

use crate::clock::{ClockTime, SlotGrid};
use crate::weekday::Weekday;

/// A whole day of 30-minute slots; no block can be longer.
const MAX_BLOCK_SLOTS: f64 = 48.0;

/// A recurring work item: `blocks_per_week` blocks of `hours_per_block` each.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub blocks_per_week: u32,
    pub hours_per_block: f64,
}

impl Project {
    /// Number of grid slots one block occupies (fractions of a slot are dropped).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn block_slots(&self) -> usize {
        (self.hours_per_block * 2.0).clamp(0.0, MAX_BLOCK_SLOTS) as usize
    }

    #[must_use]
    pub fn target_hours(&self) -> f64 {
        self.hours_per_block * f64::from(self.blocks_per_week)
    }
}

/// A fixed commitment on one day that no project block may overlap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedConstraint {
    pub name: String,
    pub day: Weekday,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

/// Everything the solver needs for one week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Usable days, in submission order. See [`PlanRequest::days`].
    pub available_days: Vec<Weekday>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub constraints: Vec<FixedConstraint>,
}

impl PlanRequest {
    #[must_use]
    pub fn grid(&self) -> SlotGrid {
        SlotGrid::new(self.start_time, self.end_time)
    }

    /// Available days with repeats dropped, first occurrence kept. This is
    /// the timetable column order.
    #[must_use]
    pub fn days(&self) -> Vec<Weekday> {
        let mut days = Vec::with_capacity(self.available_days.len());
        for day in &self.available_days {
            if !days.contains(day) {
                days.push(*day);
            }
        }
        days
    }

    /// Project names followed by constraint names, as used for colouring.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.projects
            .iter()
            .map(|p| p.name.clone())
            .chain(self.constraints.iter().map(|c| c.name.clone()))
            .collect()
    }
}
