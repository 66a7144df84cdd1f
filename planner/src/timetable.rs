//! Weekly timetable grid: one row per slot, one column per available day.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::model::PlanRequest;
use crate::solver::Schedule;
use crate::weekday::Weekday;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub days: Vec<Weekday>,
    pub slots: Vec<ClockTime>,
    /// `cells[slot][day]`: the project or constraint name occupying it.
    pub cells: Vec<Vec<Option<String>>>,
}

impl Timetable {
    /// Lay a schedule onto the grid.
    ///
    /// Fixed constraints are written first; project blocks only fill cells
    /// that are still free. An unsolved schedule yields an empty grid.
    #[must_use]
    pub fn build(request: &PlanRequest, schedule: &Schedule) -> Self {
        let slots = request.grid().labels();
        let days = request.days();
        let mut cells = vec![vec![None; days.len()]; slots.len()];

        if schedule.status.has_solution() {
            for (day, column) in schedule.blocked.iter().enumerate() {
                for (slot, constraint) in column.iter().enumerate() {
                    if let Some(c) = constraint.and_then(|idx| request.constraints.get(idx)) {
                        cells[slot][day] = Some(c.name.clone());
                    }
                }
            }
            for placement in &schedule.placements {
                let Some(project) = request.projects.get(placement.project) else {
                    continue;
                };
                for row in cells.iter_mut().skip(placement.start_slot).take(placement.len) {
                    let cell = &mut row[placement.day];
                    if cell.is_none() {
                        *cell = Some(project.name.clone());
                    }
                }
            }
        }

        Self { days, slots, cells }
    }

    #[must_use]
    pub fn cell(&self, slot: usize, day: usize) -> Option<&str> {
        self.cells.get(slot)?.get(day)?.as_deref()
    }

    /// Number of cells carrying `label`.
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.as_deref() == Some(label))
            .count()
    }

    /// Boxed text rendering with centred cells, headed `Weekly Timetable:`.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut header = vec!["Time".to_owned()];
        header.extend(self.days.iter().map(ToString::to_string));
        let rows: Vec<Vec<String>> = self
            .slots
            .iter()
            .zip(&self.cells)
            .map(|(time, row)| {
                std::iter::once(time.to_string())
                    .chain(row.iter().map(|cell| cell.clone().unwrap_or_default()))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                std::iter::once(&header)
                    .chain(&rows)
                    .map(|r| r[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |left: &str, mid: &str, right: &str| {
            let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{left}{}{right}\n", parts.join(mid))
        };
        let line = |cells: &[String]| {
            let parts: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(text, &width)| format!(" {text:^width$} "))
                .collect();
            format!("│{}│\n", parts.join("│"))
        };

        let mut out = String::from("\nWeekly Timetable:\n");
        out.push_str(&rule("╭", "┬", "╮"));
        out.push_str(&line(&header));
        for row in &rows {
            out.push_str(&rule("├", "┼", "┤"));
            out.push_str(&line(row));
        }
        out.push_str(&rule("╰", "┴", "╯"));
        out
    }
}

#[cfg(test)]
#[path = "timetable_test.rs"]
mod tests;
