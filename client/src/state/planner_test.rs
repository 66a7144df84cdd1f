use super::*;

fn t(raw: &str) -> ClockTime {
    raw.parse().expect("valid time")
}

// =============================================================
// initial_form
// =============================================================

#[test]
fn initial_form_is_workweek_with_one_project() {
    let form = initial_form();
    assert_eq!(form.available_days, Weekday::WORKWEEK.to_vec());
    assert_eq!(form.start_time, Some(t("08:00")));
    assert_eq!(form.end_time, Some(t("18:00")));
    assert_eq!(form.projects().len(), 1);
    assert_eq!(form.project_count(), 1);
    assert!(form.constraints().is_empty());
}

#[test]
fn initial_form_passes_validation() {
    assert!(initial_form().validate().is_ok());
}

// =============================================================
// Input parsing
// =============================================================

#[test]
fn parse_time_input_treats_blank_as_unset() {
    assert_eq!(parse_time_input(""), None);
    assert_eq!(parse_time_input("   "), None);
    assert_eq!(parse_time_input("nope"), None);
    assert_eq!(parse_time_input("09:30"), Some(t("09:30")));
}

#[test]
fn blocks_input_updates_row_and_ignores_garbage() {
    let mut form = initial_form();
    apply_blocks_input(&mut form, 0, "5").expect("apply");
    assert_eq!(form.projects()[0].blocks_per_week, 5);
    apply_blocks_input(&mut form, 0, "five").expect("garbage is ignored");
    assert_eq!(form.projects()[0].blocks_per_week, 5);
    assert_eq!(apply_blocks_input(&mut form, 7, "2"), Err(FieldError::UnknownProject(7)));
}

#[test]
fn hours_input_rejects_out_of_range_values() {
    let mut form = initial_form();
    apply_hours_input(&mut form, 0, "1.5").expect("apply");
    assert!((form.projects()[0].hours_per_block - 1.5).abs() < f64::EPSILON);
    assert!(matches!(apply_hours_input(&mut form, 0, "30"), Err(FieldError::HoursPerBlock(_))));
}

// =============================================================
// Constraint inputs
// =============================================================

#[test]
fn constraint_time_inputs_set_one_side_at_a_time() {
    let mut form = initial_form();
    let index = form.add_constraint();
    apply_constraint_start(&mut form, index, "09:00").expect("start");
    apply_constraint_end(&mut form, index, "10:00").expect("end");
    let row = &form.constraints()[0];
    assert_eq!(row.start_time, Some(t("09:00")));
    assert_eq!(row.end_time, Some(t("10:00")));

    apply_constraint_start(&mut form, index, "").expect("clear");
    assert_eq!(form.constraints()[0].start_time, None);
    assert_eq!(form.constraints()[0].end_time, Some(t("10:00")));
}

#[test]
fn constraint_day_input_parses_weekday_names() {
    let mut form = initial_form();
    let index = form.add_constraint();
    apply_day_input(&mut form, index, "Thursday").expect("day");
    assert_eq!(form.constraints()[0].day, Weekday::Thursday);
}

#[test]
fn constraint_bounds_follow_window_changes() {
    let mut form = initial_form();
    let index = form.add_constraint();
    assert_eq!(constraint_bounds(&form, index).and_then(|b| b.min), Some(t("08:00")));

    form.set_start_time(Some(t("07:30")));
    let bounds = constraint_bounds(&form, index).expect("row exists");
    assert_eq!(bounds.min, Some(t("07:30")));
    assert_eq!(bounds.max, Some(t("18:00")));

    form.remove_constraint(index);
    assert_eq!(constraint_bounds(&form, index), None);
    assert_eq!(apply_constraint_end(&mut form, index, "10:00"), Err(FieldError::UnknownConstraint(index)));
}
