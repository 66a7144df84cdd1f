//! Planner form page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form posts natively to `/generate`; the server decodes it and answers
//! with the results page. Before the browser submits, the page checks every
//! constraint row against the chosen days and window. A failure raises a
//! blocking alert and cancels the submission, so nothing reaches the server.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use planner::PlannerForm;

use crate::components::{
    constraint_table::ConstraintTable, day_picker::DayPicker, project_table::ProjectTable, time_window::TimeWindow,
};
use crate::util::alert::blocking_alert;

/// Planner page: window, days, projects, constraints and a submit button.
#[component]
pub fn PlannerPage() -> impl IntoView {
    let form = expect_context::<RwSignal<PlannerForm>>();

    let on_submit = move |ev: SubmitEvent| {
        if let Err(violation) = form.with_untracked(PlannerForm::validate) {
            ev.prevent_default();
            blocking_alert(&violation.to_string());
        }
    };

    view! {
        <div class="planner-page">
            <h1>"Weekly Planner"</h1>
            <form id="planner-form" method="post" action="/generate" on:submit=on_submit>
                <TimeWindow/>
                <DayPicker/>
                <ProjectTable/>
                <ConstraintTable/>
                <button type="submit" class="btn btn--primary">
                    "Generate Timetable"
                </button>
            </form>
        </div>
    }
}
