//! Planner document shell and the routed app that owns the form signal.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::planner::PlannerPage;
use crate::state::planner::initial_form;

/// Document around the planner app. The server renders it for `GET /`, and
/// the hydration scripts it embeds load the wasm bundle from `/pkg`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the planner form model as a context signal and routes `/` to the
/// form page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let form = RwSignal::new(initial_form());
    provide_context(form);

    view! {
        <Stylesheet id="leptos" href="/pkg/weekplan.css"/>
        <Title text="Weekly Planner"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PlannerPage/>
            </Routes>
        </Router>
    }
}
