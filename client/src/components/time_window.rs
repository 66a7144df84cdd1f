//! Global start/end time inputs.

use leptos::prelude::*;
use planner::fields;
use planner::form::display_time;

use crate::state::planner::parse_time_input;

/// The planning window. A change to either input re-bounds every
/// constraint row's time pickers.
#[component]
pub fn TimeWindow() -> impl IntoView {
    let form = expect_context::<RwSignal<planner::PlannerForm>>();
    let (initial_start, initial_end) = form.with_untracked(|f| (display_time(f.start_time), display_time(f.end_time)));

    view! {
        <fieldset class="time-window">
            <legend>"Available hours"</legend>
            <label for=fields::START_TIME>"Start time"</label>
            <input
                type="time"
                id=fields::START_TIME
                name=fields::START_TIME
                required
                value=initial_start
                on:change=move |ev| {
                    let time = parse_time_input(&event_target_value(&ev));
                    form.update(|f| f.set_start_time(time));
                }
            />
            <label for=fields::END_TIME>"End time"</label>
            <input
                type="time"
                id=fields::END_TIME
                name=fields::END_TIME
                required
                value=initial_end
                on:change=move |ev| {
                    let time = parse_time_input(&event_target_value(&ev));
                    form.update(|f| f.set_end_time(time));
                }
            />
        </fieldset>
    }
}
