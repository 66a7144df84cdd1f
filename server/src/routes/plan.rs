//! Plan endpoints.
//!
//! `POST /generate` is the native form target and always answers with an
//! HTML page, error text included. `POST /api/schedule` takes the same body
//! and answers with JSON for scripted callers such as the CLI.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Html;
use client::pages::results::render_document;
use planner::PlanOutcome;

use crate::services::planning::{self, PlanningError};
use crate::state::AppState;

pub(crate) fn planning_error_to_status(err: &PlanningError) -> StatusCode {
    match err {
        PlanningError::Submission(_) => StatusCode::BAD_REQUEST,
        PlanningError::Solve(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PlanningError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /generate`: solve a submitted form and render the results page.
pub async fn generate(State(state): State<AppState>, Form(pairs): Form<Vec<(String, String)>>) -> Html<String> {
    match planning::plan_submission(state.solver, pairs).await {
        Ok(outcome) => Html(render_document(Some(outcome), None)),
        Err(e) => {
            tracing::warn!(error = %e, "generate failed");
            Html(render_document(None, Some(format!("Error: {e}"))))
        }
    }
}

/// `POST /api/schedule`: solve a submitted form and return the outcome.
pub async fn schedule(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Json<PlanOutcome>, (StatusCode, Json<serde_json::Value>)> {
    planning::plan_submission(state.solver, pairs)
        .await
        .map(Json)
        .map_err(|e| {
            let status = planning_error_to_status(&e);
            tracing::warn!(error = %e, %status, "schedule failed");
            (status, Json(serde_json::json!({ "error": e.to_string() })))
        })
}
