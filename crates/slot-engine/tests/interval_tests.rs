//! Tests for half-open interval overlap and time-of-day parsing.

use chrono::NaiveTime;
use slot_engine::{Interval, SlotError, TimeOfDay};

/// Helper to create an Interval from hour/minute pairs.
fn interval(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Interval {
    Interval::new(
        TimeOfDay::from_hm(start_hour, start_min).unwrap(),
        TimeOfDay::from_hm(end_hour, end_min).unwrap(),
    )
    .unwrap()
}

#[test]
fn overlapping_intervals_detected() {
    // 09:00-10:00 and 09:30-10:30 share 30 minutes
    let a = interval(9, 0, 10, 0);
    let b = interval(9, 30, 10, 30);

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a), "overlap must be symmetric");
}

#[test]
fn disjoint_intervals_do_not_overlap() {
    let a = interval(9, 0, 10, 0);
    let b = interval(11, 0, 12, 0);

    assert!(!a.overlaps(&b));
}

#[test]
fn adjacent_intervals_do_not_overlap() {
    // 09:00-10:00 then 10:00-11:00 → end == start, not a conflict
    let a = interval(9, 0, 10, 0);
    let b = interval(10, 0, 11, 0);

    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn contained_interval_overlaps_and_is_contained() {
    let outer = interval(9, 0, 12, 0);
    let inner = interval(10, 0, 11, 0);

    assert!(outer.overlaps(&inner));
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
    assert_eq!(inner.duration_minutes(), 60);
}

#[test]
fn empty_or_reversed_interval_rejected() {
    let nine = TimeOfDay::from_hm(9, 0).unwrap();
    let ten = TimeOfDay::from_hm(10, 0).unwrap();

    assert!(matches!(
        Interval::new(nine, nine),
        Err(SlotError::InvalidInput(_))
    ));
    assert!(matches!(
        Interval::new(ten, nine),
        Err(SlotError::InvalidInput(_))
    ));
}

#[test]
fn interval_deserialization_rejects_reversed_bounds() {
    let ok: Interval = serde_json::from_str(r#"{"start":"10:00","end":"11:00"}"#).unwrap();
    assert_eq!(ok.duration_minutes(), 60);

    assert!(serde_json::from_str::<Interval>(r#"{"start":"11:00","end":"10:00"}"#).is_err());
}

// ── TimeOfDay ───────────────────────────────────────────────────────────────

#[test]
fn time_parses_hh_mm_and_hh_mm_ss() {
    assert_eq!("09:00".parse::<TimeOfDay>().unwrap().minutes(), 540);
    assert_eq!("9:05".parse::<TimeOfDay>().unwrap().minutes(), 545);
    assert_eq!("18:00:00".parse::<TimeOfDay>().unwrap().minutes(), 1080);
    assert_eq!("23:59".parse::<TimeOfDay>().unwrap(), TimeOfDay::LAST_MINUTE);
}

#[test]
fn time_rejects_out_of_range_and_garbage() {
    for bad in [
        "24:00", "12:60", "12", "", "ab:cd", "12:5", "12:00:61", "1:2:3:4", "-1:00", "09:+5",
        "+9:00", "009:00", "12:00:+1", " 9 :00",
    ] {
        assert!(
            matches!(bad.parse::<TimeOfDay>(), Err(SlotError::InvalidTime(_))),
            "'{}' should not parse",
            bad
        );
    }
}

#[test]
fn const_constructor_matches_checked_one() {
    const NOON: TimeOfDay = TimeOfDay::hm(12, 0);
    assert_eq!(NOON, TimeOfDay::from_hm(12, 0).unwrap());
    assert_eq!(TimeOfDay::hm(23, 59), TimeOfDay::LAST_MINUTE);
}

#[test]
fn time_from_minutes_enforces_day_bounds() {
    assert_eq!(TimeOfDay::from_minutes(0).unwrap(), TimeOfDay::MIDNIGHT);
    assert!(TimeOfDay::from_minutes(1439).is_ok());
    assert!(TimeOfDay::from_minutes(1440).is_err());
    assert!(TimeOfDay::from_minutes(-1).is_err());
}

#[test]
fn time_displays_zero_padded() {
    let t = TimeOfDay::from_minutes(65).unwrap();
    assert_eq!(t.to_string(), "01:05");
    assert_eq!(t.hour(), 1);
    assert_eq!(t.minute(), 5);
}

#[test]
fn time_checked_add_stays_within_day() {
    let t = TimeOfDay::from_hm(23, 0).unwrap();
    assert_eq!(t.checked_add_minutes(59), Some(TimeOfDay::LAST_MINUTE));
    assert_eq!(t.checked_add_minutes(60), None);
}

#[test]
fn time_from_naive_time_truncates_seconds() {
    let naive = NaiveTime::from_hms_opt(14, 30, 45).unwrap();
    let t = TimeOfDay::from(naive);
    assert_eq!(t.to_string(), "14:30");
    assert_eq!(t.to_naive_time(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
}

#[test]
fn time_serde_uses_string_form() {
    let t: TimeOfDay = serde_json::from_str(r#""07:15""#).unwrap();
    assert_eq!(serde_json::to_string(&t).unwrap(), r#""07:15""#);
    assert!(serde_json::from_str::<TimeOfDay>(r#""25:00""#).is_err());
}
