//! Turn a submitted planner form into a solved plan.
//!
//! DESIGN
//! ======
//! Decoding is cheap and runs inline. The block search is CPU-bound and can
//! use its whole node budget, so it runs on the blocking pool rather than on
//! a runtime worker.

use planner::{PlanOutcome, SolveError, SolverConfig, SubmissionError};

#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("invalid submission: {0}")]
    Submission(#[from] SubmissionError),
    #[error("cannot schedule: {0}")]
    Solve(#[from] SolveError),
    #[error("solver task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Decode `pairs` and solve the resulting plan.
///
/// # Errors
///
/// Returns [`PlanningError::Submission`] for a malformed body,
/// [`PlanningError::Solve`] for a constraint that cannot be placed, and
/// [`PlanningError::Join`] if the solver task panics.
pub async fn plan_submission(solver: SolverConfig, pairs: Vec<(String, String)>) -> Result<PlanOutcome, PlanningError> {
    let request = planner::decode(&pairs)?;
    tracing::info!(
        days = request.available_days.len(),
        projects = request.projects.len(),
        constraints = request.constraints.len(),
        node_budget = solver.node_budget,
        "planning submission"
    );

    let outcome = tokio::task::spawn_blocking(move || planner::plan(&request, &solver)).await??;
    tracing::info!(status = ?outcome.status, "plan finished");
    Ok(outcome)
}

#[cfg(test)]
#[path = "planning_test.rs"]
mod tests;
