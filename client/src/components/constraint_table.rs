//! Editable table of fixed constraints.
//!
//! New rows take the window's current bounds; the `min`/`max` attributes
//! then track the window through the form model, so a row never needs to be
//! re-rendered when the window changes.

use leptos::prelude::*;
use planner::fields::{self, ConstraintField};
use planner::{ConstraintRow, PlannerForm, Weekday};

use crate::state::planner::{apply_constraint_end, apply_constraint_start, apply_day_input, constraint_bounds, edit};

/// Constraint rows plus the add button and the `constraint_count` counter.
#[component]
pub fn ConstraintTable() -> impl IntoView {
    let form = expect_context::<RwSignal<PlannerForm>>();

    view! {
        <section class="constraint-table">
            <h2>"Fixed constraints"</h2>
            <table id="constraints-table">
                <thead>
                    <tr>
                        <th>"Day"</th>
                        <th>"Start"</th>
                        <th>"End"</th>
                        <th>"Name"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || form.with(|f| f.constraints().to_vec())
                        key=|row| row.index
                        children=move |row: ConstraintRow| view! { <ConstraintRowView row/> }
                    />
                </tbody>
            </table>
            <input
                type="hidden"
                name=fields::CONSTRAINT_COUNT
                value=move || form.with(|f| f.constraint_count().to_string())
            />
            <button
                type="button"
                class="btn btn--secondary"
                on:click=move |_| {
                    form.update(|f| {
                        f.add_constraint();
                    });
                }
            >
                "Add Constraint"
            </button>
        </section>
    }
}

#[component]
fn ConstraintRowView(row: ConstraintRow) -> impl IntoView {
    let form = expect_context::<RwSignal<PlannerForm>>();
    let index = row.index;

    let min = move || form.with(|f| constraint_bounds(f, index)).and_then(|b| b.min).map(|t| t.to_string());
    let max = move || form.with(|f| constraint_bounds(f, index)).and_then(|b| b.max).map(|t| t.to_string());

    let options = Weekday::ALL
        .into_iter()
        .map(|day| {
            view! {
                <option value=day.as_str() selected=day == row.day>
                    {day.as_str()}
                </option>
            }
        })
        .collect_view();

    view! {
        <tr>
            <td>
                <select
                    name=row.field_name(ConstraintField::Day)
                    required
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        edit(form, |f| apply_day_input(f, index, &raw));
                    }
                >
                    {options}
                </select>
            </td>
            <td>
                <input
                    type="time"
                    id=fields::constraint_start_id(index)
                    name=row.field_name(ConstraintField::StartTime)
                    required
                    min=min
                    max=max
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        edit(form, |f| apply_constraint_start(f, index, &raw));
                    }
                />
            </td>
            <td>
                <input
                    type="time"
                    id=fields::constraint_end_id(index)
                    name=row.field_name(ConstraintField::EndTime)
                    required
                    min=min
                    max=max
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        edit(form, |f| apply_constraint_end(f, index, &raw));
                    }
                />
            </td>
            <td>
                <input
                    type="text"
                    name=row.field_name(ConstraintField::Name)
                    required
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        edit(form, |f| f.set_constraint_name(index, name));
                    }
                />
            </td>
            <td>
                <button
                    type="button"
                    class="btn btn--danger remove-btn"
                    on:click=move |_| {
                        form.update(|f| {
                            f.remove_constraint(index);
                        });
                    }
                >
                    "Remove"
                </button>
            </td>
        </tr>
    }
}
