use super::*;
use planner::demo::sample_week;
use planner::{SolveStatus, SolverConfig, plan};

#[test]
fn solved_plan_renders_stats_and_coloured_grid() {
    let outcome = plan(&sample_week(), &SolverConfig::default()).expect("plan");
    let html = render_document(Some(outcome), None);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Assignment Statistics"));
    assert!(html.contains("Analyst work"));
    assert!(html.contains("Lunch break"));
    assert!(html.contains("100%"));
    // Job Hunt takes the second pastel.
    assert!(html.contains("background-color: #c8ffc8"));
    assert!(!html.contains(NO_SOLUTION));
}

#[test]
fn unsolved_plan_renders_no_solution() {
    let mut outcome = plan(&sample_week(), &SolverConfig::default()).expect("plan");
    outcome.status = SolveStatus::Infeasible;
    let html = render_document(Some(outcome), None);
    assert!(html.contains(NO_SOLUTION));
    assert!(!html.contains("Assignment Statistics"));
}

#[test]
fn error_message_is_shown_instead_of_results() {
    let html = render_document(None, Some("missing field `start_time`".to_owned()));
    assert!(html.contains("missing field `start_time`"));
    assert!(html.contains("Back to planner"));
}
