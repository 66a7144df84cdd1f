use super::*;
use crate::form::PlannerForm;

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn t(raw: &str) -> ClockTime {
    raw.parse().expect("valid time")
}

fn base() -> Vec<(&'static str, &'static str)> {
    vec![
        ("available_days", "Monday"),
        ("available_days", "Wednesday"),
        ("start_time", "08:00"),
        ("end_time", "18:00"),
    ]
}

#[test]
fn decodes_window_and_days() {
    let request = decode(&pairs(&base())).expect("decode");
    assert_eq!(request.available_days, vec![Weekday::Monday, Weekday::Wednesday]);
    assert_eq!(request.start_time, t("08:00"));
    assert_eq!(request.end_time, t("18:00"));
    assert!(request.projects.is_empty());
    assert!(request.constraints.is_empty());
}

#[test]
fn missing_window_is_an_error() {
    let err = decode(&pairs(&[("end_time", "18:00")])).unwrap_err();
    assert_eq!(err, SubmissionError::MissingField("start_time"));
}

#[test]
fn decodes_projects_with_defaults() {
    let mut raw = base();
    raw.extend([
        ("project_count", "2"),
        ("projects[0][name]", "Gym"),
        ("projects[0][blocks_per_week]", "4"),
        ("projects[0][hours_per_block]", "1.5"),
        ("projects[1][name]", "Read"),
    ]);
    let request = decode(&pairs(&raw)).expect("decode");
    assert_eq!(
        request.projects,
        vec![
            Project { name: "Gym".into(), blocks_per_week: 4, hours_per_block: 1.5 },
            Project { name: "Read".into(), blocks_per_week: 3, hours_per_block: 1.0 },
        ]
    );
}

#[test]
fn skips_gaps_and_blank_names() {
    let mut raw = base();
    raw.extend([
        ("project_count", "4"),
        ("projects[1][name]", ""),
        ("projects[1][blocks_per_week]", "2"),
        ("projects[3][name]", "Write"),
    ]);
    let request = decode(&pairs(&raw)).expect("decode");
    assert_eq!(request.projects.len(), 1);
    assert_eq!(request.projects[0].name, "Write");
}

#[test]
fn rows_beyond_count_are_ignored() {
    let mut raw = base();
    raw.extend([("project_count", "1"), ("projects[1][name]", "Hidden")]);
    assert!(decode(&pairs(&raw)).expect("decode").projects.is_empty());
}

#[test]
fn decodes_complete_constraints_only() {
    let mut raw = base();
    raw.extend([
        ("constraint_count", "3"),
        ("constraints[0][day]", "Monday"),
        ("constraints[0][start_time]", "13:00"),
        ("constraints[0][end_time]", "13:30"),
        ("constraints[0][name]", "Lunch"),
        ("constraints[2][day]", "Wednesday"),
        ("constraints[2][start_time]", "09:00"),
        ("constraints[2][end_time]", ""),
        ("constraints[2][name]", "Standup"),
    ]);
    let request = decode(&pairs(&raw)).expect("decode");
    assert_eq!(
        request.constraints,
        vec![FixedConstraint {
            name: "Lunch".into(),
            day: Weekday::Monday,
            start_time: t("13:00"),
            end_time: t("13:30"),
        }]
    );
}

#[test]
fn malformed_numbers_and_times_are_errors() {
    let mut raw = base();
    raw.extend([("project_count", "1"), ("projects[0][name]", "Gym"), ("projects[0][blocks_per_week]", "many")]);
    assert!(matches!(
        decode(&pairs(&raw)),
        Err(SubmissionError::InvalidNumber { field, .. }) if field == "projects[0][blocks_per_week]"
    ));

    let bad_count = pairs(&[("start_time", "08:00"), ("end_time", "09:00"), ("constraint_count", "x")]);
    assert!(matches!(decode(&bad_count), Err(SubmissionError::InvalidNumber { .. })));

    let bad_time = pairs(&[("start_time", "8am"), ("end_time", "09:00")]);
    assert!(matches!(decode(&bad_time), Err(SubmissionError::InvalidTime { .. })));

    let bad_day = pairs(&[("start_time", "08:00"), ("end_time", "09:00"), ("available_days", "Someday")]);
    assert!(matches!(decode(&bad_day), Err(SubmissionError::InvalidDay { .. })));
}

#[test]
fn decodes_what_the_form_model_encodes() {
    let mut form = PlannerForm::new();
    form.set_start_time(Some(t("09:00")));
    form.set_end_time(Some(t("17:00")));
    form.set_day_available(Weekday::Tuesday, true);
    let keep = form.add_project();
    let drop = form.add_project();
    form.set_project_name(keep, "Analyst work").unwrap();
    form.set_blocks_per_week(keep, 2).unwrap();
    form.remove_project(drop);
    let c = form.add_constraint();
    form.set_constraint_day(c, Weekday::Tuesday).unwrap();
    form.set_constraint_times(c, Some(t("14:00")), Some(t("15:00"))).unwrap();
    form.set_constraint_name(c, "Writing group").unwrap();

    let request = decode(&form.to_fields()).expect("decode");
    assert_eq!(request.available_days, vec![Weekday::Tuesday]);
    assert_eq!(request.projects, vec![Project { name: "Analyst work".into(), blocks_per_week: 2, hours_per_block: 1.0 }]);
    assert_eq!(request.constraints.len(), 1);
    assert_eq!(request.constraints[0].name, "Writing group");
}

#[test]
fn repeated_days_collapse_to_one_column() {
    let mut raw = base();
    raw.extend([("available_days", "Monday"), ("available_days", "Monday"), ("available_days", "Tuesday")]);
    let request = decode(&pairs(&raw)).expect("decode");
    let mondays = request.available_days.iter().filter(|d| **d == Weekday::Monday).count();
    assert_eq!(mondays, 1);
    assert_eq!(request.available_days.len(), request.days().len());
}

#[test]
fn hours_per_block_must_be_finite_and_within_a_day() {
    for hours in ["1e300", "inf", "NaN", "-1", "24.5"] {
        let mut raw = base();
        raw.extend([
            ("project_count", "1"),
            ("projects[0][name]", "Gym"),
            ("projects[0][blocks_per_week]", "3"),
            ("projects[0][hours_per_block]", hours),
        ]);
        assert!(
            matches!(
                decode(&pairs(&raw)),
                Err(SubmissionError::InvalidNumber { field, .. }) if field == "projects[0][hours_per_block]"
            ),
            "{hours}"
        );
    }
}

#[test]
fn huge_counts_only_visit_submitted_rows() {
    let mut raw: Vec<(&str, &str)> = base();
    let huge = usize::MAX.to_string();
    raw.extend([
        ("project_count", huge.as_str()),
        ("constraint_count", huge.as_str()),
        ("projects[7][name]", "Read"),
    ]);
    let request = decode(&pairs(&raw)).expect("decode");
    assert_eq!(request.projects.len(), 1);
    assert_eq!(request.projects[0].name, "Read");
    assert!(request.constraints.is_empty());
}

#[test]
fn rows_at_or_above_the_count_are_ignored() {
    let mut raw = base();
    raw.extend([("project_count", "1"), ("projects[0][name]", "Gym"), ("projects[1][name]", "Stale")]);
    let request = decode(&pairs(&raw)).expect("decode");
    assert_eq!(request.projects.len(), 1);
    assert_eq!(request.projects[0].name, "Gym");
}
