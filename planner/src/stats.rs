//! Per-project assignment statistics.

use serde::{Deserialize, Serialize};

use crate::clock::SLOT_MINUTES;
use crate::model::Project;
use crate::timetable::Timetable;

const SLOTS_PER_HOUR: f64 = 60.0 / SLOT_MINUTES as f64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub project_name: String,
    /// Whole-percent completion, e.g. `"100%"`.
    pub assigned: String,
    pub target_blocks: u32,
    pub hours_per_block: f64,
    pub total_target_hours: f64,
    pub assigned_slots: usize,
    pub assigned_blocks: u32,
    pub total_assigned_hours: f64,
}

/// Count what the timetable actually gives each project.
///
/// Cells are matched by name, so a fixed constraint that shares a project's
/// name counts towards that project.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn project_statistics(projects: &[Project], timetable: &Timetable) -> Vec<ProjectStats> {
    projects
        .iter()
        .map(|project| {
            let assigned_slots = timetable.count(&project.name);
            let total_assigned_hours = assigned_slots as f64 / SLOTS_PER_HOUR;
            let total_target_hours = project.target_hours();
            let completion = if total_target_hours > 0.0 { total_assigned_hours / total_target_hours } else { 0.0 };
            let assigned_blocks = if project.hours_per_block > 0.0 {
                (total_assigned_hours / project.hours_per_block) as u32
            } else {
                0
            };
            ProjectStats {
                project_name: project.name.clone(),
                assigned: format!("{:.0}%", completion * 100.0),
                target_blocks: project.blocks_per_week,
                hours_per_block: project.hours_per_block,
                total_target_hours,
                assigned_slots,
                assigned_blocks,
                total_assigned_hours,
            }
        })
        .collect()
}

/// Statistics as an aligned text table, for terminal output.
#[must_use]
pub fn render_text(stats: &[ProjectStats]) -> String {
    let mut out = String::from("\nAssignment Statistics:\n");
    let name_width = stats.iter().map(|s| s.project_name.chars().count()).max().unwrap_or(0).max(12);
    out.push_str(&format!(
        "{:<name_width$}  {:>8}  {:>6}  {:>6}  {:>7}  {:>6}  {:>8}  {:>8}\n",
        "Project Name", "Assigned", "Blocks", "Hours", "Target", "Slots", "Assigned", "Assigned"
    ));
    out.push_str(&format!(
        "{:<name_width$}  {:>8}  {:>6}  {:>6}  {:>7}  {:>6}  {:>8}  {:>8}\n",
        "", "", "target", "/block", "hours", "", "blocks", "hours"
    ));
    for s in stats {
        out.push_str(&format!(
            "{:<name_width$}  {:>8}  {:>6}  {:>6.2}  {:>7.2}  {:>6}  {:>8}  {:>8.2}\n",
            s.project_name,
            s.assigned,
            s.target_blocks,
            s.hours_per_block,
            s.total_target_hours,
            s.assigned_slots,
            s.assigned_blocks,
            s.total_assigned_hours
        ));
    }
    out
}
