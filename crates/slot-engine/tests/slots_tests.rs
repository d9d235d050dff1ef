//! Tests for slot grid computation.

use slot_engine::{
    compute_slots, count_available, first_available, Interval, OperatingHours, Slot, SlotError,
    TimeOfDay,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn booked(start: &str, end: &str) -> Interval {
    Interval::new(t(start), t(end)).unwrap()
}

fn slot(start: &str, end: &str, available: bool) -> Slot {
    Slot {
        start: t(start),
        end: t(end),
        available,
    }
}

// ── Reference scenario ──────────────────────────────────────────────────────

#[test]
fn one_hour_booking_blocks_three_grid_slots() {
    // 09:00-12:00, 60 min service, 10:00-11:00 already booked
    let slots = compute_slots(t("09:00"), t("12:00"), 60, &[booked("10:00", "11:00")]).unwrap();

    assert_eq!(
        slots,
        vec![
            slot("09:00", "10:00", true),
            slot("09:30", "10:30", false),
            slot("10:00", "11:00", false),
            slot("10:30", "11:30", false),
            slot("11:00", "12:00", true),
        ]
    );
}

// ── No bookings ─────────────────────────────────────────────────────────────

#[test]
fn empty_day_is_fully_available() {
    // 09:00-18:00 with 60 min service → (540 - 60) / 30 + 1 = 17 slots
    let slots = compute_slots(t("09:00"), t("18:00"), 60, &[]).unwrap();

    assert_eq!(slots.len(), 17);
    assert!(slots.iter().all(|s| s.available));
    assert_eq!(slots[0], slot("09:00", "10:00", true));
    assert_eq!(slots[16], slot("17:00", "18:00", true));
}

#[test]
fn window_equal_to_duration_yields_single_slot() {
    let slots = compute_slots(t("09:00"), t("10:30"), 90, &[]).unwrap();

    assert_eq!(slots, vec![slot("09:00", "10:30", true)]);
}

#[test]
fn duration_longer_than_window_yields_no_slots() {
    let slots = compute_slots(t("09:00"), t("10:00"), 61, &[]).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn huge_duration_yields_no_slots() {
    let slots = compute_slots(t("09:00"), t("18:00"), i64::MAX, &[]).unwrap();
    assert!(slots.is_empty());

    let whole_day =
        compute_slots(TimeOfDay::MIDNIGHT, TimeOfDay::LAST_MINUTE, i64::MAX - 1, &[]).unwrap();
    assert!(whole_day.is_empty());
}

#[test]
fn off_grid_duration_keeps_thirty_minute_step() {
    // 45 min manicure: starts stay on the 30 min grid, ends do not.
    let slots = compute_slots(t("09:00"), t("11:00"), 45, &[]).unwrap();

    let starts: Vec<String> = slots.iter().map(|s| s.start.to_string()).collect();
    assert_eq!(starts, vec!["09:00", "09:30", "10:00"]);
    assert_eq!(slots[2].end, t("10:45"));
}

#[test]
fn off_grid_opening_anchors_the_grid() {
    let slots = compute_slots(t("08:45"), t("10:15"), 30, &[]).unwrap();

    let starts: Vec<String> = slots.iter().map(|s| s.start.to_string()).collect();
    assert_eq!(starts, vec!["08:45", "09:15", "09:45"]);
}

// ── Overlap semantics ───────────────────────────────────────────────────────

#[test]
fn touching_bookings_do_not_block_neighbours() {
    let slots = compute_slots(t("09:00"), t("12:00"), 30, &[booked("10:00", "10:30")]).unwrap();

    let at = |start: &str| slots.iter().find(|s| s.start == t(start)).unwrap();
    assert!(at("09:30").available, "[09:30,10:00) only touches the booking");
    assert!(!at("10:00").available, "[10:00,10:30) is the booking itself");
    assert!(at("10:30").available, "[10:30,11:00) only touches the booking");
}

#[test]
fn booking_inside_long_slot_blocks_it() {
    // 15 min booking fully inside a 2 hour slot
    let slots = compute_slots(t("09:00"), t("11:00"), 120, &[booked("09:40", "09:55")]).unwrap();

    assert_eq!(slots, vec![slot("09:00", "11:00", false)]);
}

#[test]
fn booking_covering_whole_day_blocks_everything() {
    let slots = compute_slots(t("09:00"), t("18:00"), 30, &[booked("08:00", "19:00")]).unwrap();

    assert_eq!(slots.len(), 18);
    assert_eq!(count_available(&slots), 0);
    assert!(first_available(&slots).is_none());
}

#[test]
fn bookings_outside_hours_are_ignored() {
    let slots = compute_slots(
        t("09:00"),
        t("12:00"),
        60,
        &[booked("07:00", "09:00"), booked("12:00", "13:00")],
    )
    .unwrap();

    assert_eq!(count_available(&slots), slots.len());
}

#[test]
fn unsorted_and_duplicate_bookings_give_same_result() {
    let sorted = vec![booked("09:00", "09:30"), booked("11:00", "12:00")];
    let shuffled = vec![
        booked("11:00", "12:00"),
        booked("09:00", "09:30"),
        booked("11:00", "12:00"),
    ];

    let a = compute_slots(t("09:00"), t("13:00"), 60, &sorted).unwrap();
    let b = compute_slots(t("09:00"), t("13:00"), 60, &shuffled).unwrap();
    assert_eq!(a, b);
}

#[test]
fn first_available_skips_taken_slots() {
    let slots = compute_slots(t("09:00"), t("12:00"), 60, &[booked("09:00", "10:00")]).unwrap();

    assert_eq!(first_available(&slots), Some(&slot("10:00", "11:00", true)));
    assert_eq!(count_available(&slots), 3);
}

#[test]
fn slot_latest_possible_closing() {
    let slots = compute_slots(t("23:00"), t("23:59"), 59, &[]).unwrap();
    assert_eq!(slots, vec![slot("23:00", "23:59", true)]);
}

// ── Failures ────────────────────────────────────────────────────────────────

#[test]
fn reversed_hours_are_invalid_configuration() {
    let err = compute_slots(t("18:00"), t("09:00"), 60, &[]).unwrap_err();
    assert!(matches!(err, SlotError::InvalidConfiguration(_)));
}

#[test]
fn equal_hours_are_invalid_configuration() {
    let err = compute_slots(t("09:00"), t("09:00"), 60, &[]).unwrap_err();
    assert!(matches!(err, SlotError::InvalidConfiguration(_)));
}

#[test]
fn zero_duration_is_invalid_input() {
    let err = compute_slots(t("09:00"), t("18:00"), 0, &[]).unwrap_err();
    assert!(matches!(err, SlotError::InvalidInput(_)));
}

#[test]
fn negative_duration_is_invalid_input() {
    let err = compute_slots(t("09:00"), t("18:00"), -15, &[]).unwrap_err();
    assert!(matches!(err, SlotError::InvalidInput(_)));
}

#[test]
fn configuration_error_is_reported_before_input_error() {
    let err = compute_slots(t("18:00"), t("09:00"), 0, &[]).unwrap_err();
    assert!(matches!(err, SlotError::InvalidConfiguration(_)));
}

// ── Serialization ───────────────────────────────────────────────────────────

#[test]
fn slot_serializes_with_hh_mm_strings() {
    let json = serde_json::to_string(&slot("09:30", "10:30", false)).unwrap();
    assert_eq!(json, r#"{"start":"09:30","end":"10:30","available":false}"#);
}

#[test]
fn operating_hours_deserialization_validates_order() {
    let ok: OperatingHours =
        serde_json::from_str(r#"{"opening":"09:00","closing":"18:00"}"#).unwrap();
    assert_eq!(ok.window_minutes(), 540);

    let bad = serde_json::from_str::<OperatingHours>(r#"{"opening":"18:00","closing":"09:00"}"#);
    assert!(bad.is_err());
}
