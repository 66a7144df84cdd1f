use super::*;

fn t(raw: &str) -> ClockTime {
    raw.parse().expect("valid time")
}

#[test]
fn parses_and_displays_hh_mm() {
    let time = t("09:30");
    assert_eq!(time.hour(), 9);
    assert_eq!(time.minute(), 30);
    assert_eq!(time.to_string(), "09:30");
}

#[test]
fn accepts_single_digit_hour_and_zero_seconds() {
    assert_eq!(t("8:00"), t("08:00"));
    assert_eq!(t("13:00:00"), t("13:00"));
}

#[test]
fn rejects_malformed_input() {
    for raw in ["", "9", "09-30", "ab:cd", "09:30:15", "1:2:3:4", "9:30 pm"] {
        assert!(matches!(raw.parse::<ClockTime>(), Err(ClockError::Malformed(_))), "{raw}");
    }
}

#[test]
fn rejects_out_of_range_components() {
    assert!(matches!("24:00".parse::<ClockTime>(), Err(ClockError::OutOfRange(_))));
    assert!(matches!("12:60".parse::<ClockTime>(), Err(ClockError::OutOfRange(_))));
}

#[test]
fn ordering_is_chronological() {
    assert!(t("08:00") < t("09:00"));
    assert!(t("17:30") > t("17:00"));
    assert!(None < Some(t("00:00")));
}

#[test]
fn serde_uses_hh_mm_strings() {
    let json = serde_json::to_string(&t("07:05")).expect("serialize");
    assert_eq!(json, "\"07:05\"");
    let back: ClockTime = serde_json::from_str("\"18:00\"").expect("deserialize");
    assert_eq!(back, t("18:00"));
}

#[test]
fn slot_grid_excludes_window_end() {
    let grid = SlotGrid::new(t("08:00"), t("10:00"));
    assert_eq!(grid.len(), 4);
    assert_eq!(grid.labels(), vec![t("08:00"), t("08:30"), t("09:00"), t("09:30")]);
    assert_eq!(grid.label(4), None);
}

#[test]
fn slot_grid_drops_trailing_partial_slot() {
    let grid = SlotGrid::new(t("08:00"), t("09:45"));
    assert_eq!(grid.len(), 3);
    assert_eq!(grid.labels().last().copied(), Some(t("09:00")));
}

#[test]
fn slot_grid_is_empty_for_inverted_window() {
    assert!(SlotGrid::new(t("17:00"), t("09:00")).is_empty());
    assert!(SlotGrid::new(t("09:00"), t("09:00")).is_empty());
}

#[test]
fn slot_grid_index_lookup_requires_exact_boundary() {
    let grid = SlotGrid::new(t("08:00"), t("12:00"));
    assert_eq!(grid.index_of(t("08:00")), Some(0));
    assert_eq!(grid.index_of(t("11:30")), Some(7));
    assert_eq!(grid.index_of(t("08:15")), None);
    assert_eq!(grid.index_of(t("07:30")), None);
    assert_eq!(grid.index_of(t("12:00")), None);
    assert_eq!(grid.boundary_of(t("12:00")), Some(8));
    assert_eq!(grid.boundary_of(t("12:30")), None);
}
