//! Available-day checkboxes.

use leptos::prelude::*;
use planner::{PlannerForm, Weekday, fields};

/// One checkbox per weekday, all submitted under `available_days`.
#[component]
pub fn DayPicker() -> impl IntoView {
    let form = expect_context::<RwSignal<PlannerForm>>();

    let boxes = Weekday::ALL
        .into_iter()
        .map(|day| {
            let id = format!("day_{}", day.as_str().to_lowercase());
            let label_for = id.clone();
            let checked = form.with_untracked(|f| f.is_day_available(day));
            view! {
                <label class="day-picker__day" for=label_for>
                    <input
                        type="checkbox"
                        id=id
                        name=fields::AVAILABLE_DAYS
                        value=day.as_str()
                        checked=checked
                        on:change=move |ev| {
                            let available = event_target_checked(&ev);
                            form.update(|f| f.set_day_available(day, available));
                        }
                    />
                    {day.as_str()}
                </label>
            }
        })
        .collect_view();

    view! {
        <fieldset class="day-picker">
            <legend>"Available days"</legend>
            {boxes}
        </fieldset>
    }
}
