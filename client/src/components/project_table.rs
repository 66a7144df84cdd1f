//! Editable table of projects.
//!
//! Rows are keyed by their stable index, so removing one row leaves the
//! others' inputs (and their field names) untouched.

use leptos::prelude::*;
use planner::fields::{self, ProjectField};
use planner::form::{DEFAULT_BLOCKS_PER_WEEK, MAX_HOURS_PER_BLOCK, MIN_HOURS_PER_BLOCK};
use planner::{PlannerForm, ProjectRow};

use crate::state::planner::{apply_blocks_input, apply_hours_input, edit};

/// Project rows plus the add button and the `project_count` counter.
#[component]
pub fn ProjectTable() -> impl IntoView {
    let form = expect_context::<RwSignal<PlannerForm>>();

    view! {
        <section class="project-table">
            <h2>"Projects"</h2>
            <table id="projects-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Blocks per week"</th>
                        <th>"Hours per block"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || form.with(|f| f.projects().to_vec())
                        key=|row| row.index
                        children=move |row: ProjectRow| view! { <ProjectRowView row/> }
                    />
                </tbody>
            </table>
            <input
                type="hidden"
                name=fields::PROJECT_COUNT
                value=move || form.with(|f| f.project_count().to_string())
            />
            <button
                type="button"
                class="btn btn--secondary"
                on:click=move |_| {
                    form.update(|f| {
                        f.add_project();
                    });
                }
            >
                "Add Project"
            </button>
        </section>
    }
}

#[component]
fn ProjectRowView(row: ProjectRow) -> impl IntoView {
    let form = expect_context::<RwSignal<PlannerForm>>();
    let index = row.index;

    view! {
        <tr>
            <td>
                <input
                    type="text"
                    name=row.field_name(ProjectField::Name)
                    required
                    value=row.name.clone()
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        edit(form, |f| f.set_project_name(index, name));
                    }
                />
            </td>
            <td>
                <input
                    type="number"
                    name=row.field_name(ProjectField::BlocksPerWeek)
                    min="1"
                    required
                    placeholder=DEFAULT_BLOCKS_PER_WEEK.to_string()
                    value=row.blocks_per_week.to_string()
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        edit(form, |f| apply_blocks_input(f, index, &raw));
                    }
                />
            </td>
            <td>
                <input
                    type="number"
                    name=row.field_name(ProjectField::HoursPerBlock)
                    min=MIN_HOURS_PER_BLOCK.to_string()
                    max=MAX_HOURS_PER_BLOCK.to_string()
                    step="0.5"
                    required
                    value=row.hours_per_block.to_string()
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        edit(form, |f| apply_hours_input(f, index, &raw));
                    }
                />
            </td>
            <td>
                <button
                    type="button"
                    class="btn btn--danger remove-btn"
                    on:click=move |_| {
                        form.update(|f| {
                            f.remove_project(index);
                        });
                    }
                >
                    "Remove"
                </button>
            </td>
        </tr>
    }
}
