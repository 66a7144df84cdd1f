//! Results page rendered by the server after a submission.
//!
//! This page is not part of the hydrated router. The server renders it to a
//! complete HTML document in response to `POST /generate`.

use leptos::prelude::*;
use planner::PlanOutcome;

use crate::components::{stats_table::StatsTable, timetable_grid::TimetableGrid};

pub const NO_SOLUTION: &str = "No solution found.";

/// Statistics and timetable of a solved plan, or the reason there is none.
#[component]
pub fn ResultsPage(outcome: Option<PlanOutcome>, error: Option<String>) -> impl IntoView {
    let body = match (outcome, error) {
        (_, Some(message)) => view! { <p class="results-page__error">{message}</p> }.into_any(),
        (Some(outcome), None) if outcome.status.has_solution() => view! {
            <h2>"Assignment Statistics"</h2>
            <StatsTable stats=outcome.stats/>
            <h2>"Weekly Timetable"</h2>
            <TimetableGrid timetable=outcome.timetable colours=outcome.colours/>
        }
        .into_any(),
        _ => view! { <p class="results-page__error">{NO_SOLUTION}</p> }.into_any(),
    };

    view! {
        <div class="results-page">
            <h1>"Weekly Planner"</h1>
            {body}
            <a href="/" class="btn btn--secondary">"Back to planner"</a>
        </div>
    }
}

/// Render a results page as a standalone HTML document.
#[cfg(feature = "ssr")]
pub fn render_document(outcome: Option<PlanOutcome>, error: Option<String>) -> String {
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| {
        view! {
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>"Weekly Timetable"</title>
                    <link rel="stylesheet" href="/pkg/weekplan.css"/>
                </head>
                <body>
                    <ResultsPage outcome error/>
                </body>
            </html>
        }
        .to_html()
    })
}

#[cfg(all(test, feature = "ssr"))]
#[path = "results_test.rs"]
mod results_test;
