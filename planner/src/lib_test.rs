use super::*;

#[test]
fn plan_solves_sample_week_end_to_end() {
    let request = demo::sample_week();
    let outcome = plan(&request, &SolverConfig::default()).expect("plan");
    assert!(outcome.status.has_solution());
    assert_eq!(outcome.stats.len(), request.projects.len());
    assert_eq!(outcome.timetable.days, request.available_days);
    assert_eq!(outcome.timetable.slots.len(), 20);
    assert_eq!(outcome.colours[0].0, "Gym");
    assert!(outcome.colours.iter().any(|(label, _)| label == "Lunch break"));
}

#[test]
fn plan_omits_stats_when_unsolvable() {
    let mut request = demo::sample_week();
    request.available_days.truncate(2);
    request.constraints.clear();
    let outcome = plan(&request, &SolverConfig::default()).expect("plan");
    assert_eq!(outcome.status, SolveStatus::Infeasible);
    assert!(outcome.stats.is_empty());
}

#[test]
fn plan_outcome_serializes_status_in_lowercase() {
    let request = demo::sample_week();
    let outcome = plan(&request, &SolverConfig::default()).expect("plan");
    let json = serde_json::to_value(&outcome).expect("serialize");
    assert!(json["status"] == "optimal" || json["status"] == "feasible");
    assert_eq!(json["timetable"]["slots"][0], "08:00");
}
