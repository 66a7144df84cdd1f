//! Per-project assignment statistics.

use leptos::prelude::*;
use planner::ProjectStats;

#[component]
pub fn StatsTable(stats: Vec<ProjectStats>) -> impl IntoView {
    let rows = stats
        .into_iter()
        .map(|s| {
            view! {
                <tr>
                    <td>{s.project_name}</td>
                    <td>{s.assigned}</td>
                    <td>{s.target_blocks}</td>
                    <td>{format!("{:.2}", s.hours_per_block)}</td>
                    <td>{format!("{:.2}", s.total_target_hours)}</td>
                    <td>{s.assigned_slots}</td>
                    <td>{s.assigned_blocks}</td>
                    <td>{format!("{:.2}", s.total_assigned_hours)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="stats-table">
            <thead>
                <tr>
                    <th>"Project Name"</th>
                    <th>"Assigned"</th>
                    <th>"Target Blocks"</th>
                    <th>"Hours/Block"</th>
                    <th>"Target Hours"</th>
                    <th>"Assigned Slots"</th>
                    <th>"Assigned Blocks"</th>
                    <th>"Assigned Hours"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
