//! Reusable UI pieces of the planner and results pages.

pub mod constraint_table;
pub mod day_picker;
pub mod project_table;
pub mod stats_table;
pub mod timetable_grid;
pub mod time_window;
