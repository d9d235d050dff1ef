//! Compute bookable slots for one service on one business day.
//!
//! Candidate starts walk a fixed 30-minute grid from opening time. Each
//! candidate spans `[t, t + duration)` and is emitted only while it ends at or
//! before closing. A candidate is unavailable when it overlaps any booked
//! interval; touching endpoints do not count.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::{Interval, OperatingHours};
use crate::time::TimeOfDay;

/// Booking grid granularity. Independent of service duration.
pub const SLOT_STEP_MINUTES: i64 = 30;

/// A candidate bookable interval with its availability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub available: bool,
}

impl Slot {
    pub fn interval(&self) -> Result<Interval> {
        Interval::new(self.start, self.end)
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes_since(self.start)
    }
}

/// Compute the slot grid for a day.
///
/// # Arguments
///
/// * `opening`, `closing` -- Operating hours; `opening` must be before `closing`.
/// * `duration_minutes` -- Service duration; must be positive.
/// * `booked` -- Intervals of active reservations, in any order. Duplicates are
///   harmless.
///
/// # Errors
/// Returns `SlotError::InvalidConfiguration` if `opening >= closing` and
/// `SlotError::InvalidInput` if `duration_minutes <= 0`.
pub fn compute_slots(
    opening: TimeOfDay,
    closing: TimeOfDay,
    duration_minutes: i64,
    booked: &[Interval],
) -> Result<Vec<Slot>> {
    let hours = OperatingHours::new(opening, closing)?;
    compute_slots_for(&hours, duration_minutes, booked)
}

/// Typed entry point behind [`compute_slots`] for already-validated hours.
pub fn compute_slots_for(
    hours: &OperatingHours,
    duration_minutes: i64,
    booked: &[Interval],
) -> Result<Vec<Slot>> {
    if duration_minutes <= 0 {
        return Err(SlotError::InvalidInput(format!(
            "service duration must be positive, got {} minutes",
            duration_minutes
        )));
    }

    let opening = i64::from(hours.opening().minutes());
    let closing = i64::from(hours.closing().minutes());

    let mut slots = Vec::new();
    let mut t = opening;
    // Durations may be close to i64::MAX.
    while duration_minutes <= closing - t {
        let candidate = Interval::new(
            TimeOfDay::from_minutes(t)?,
            TimeOfDay::from_minutes(t + duration_minutes)?,
        )?;
        let taken = booked.iter().any(|b| candidate.overlaps(b));

        slots.push(Slot {
            start: candidate.start(),
            end: candidate.end(),
            available: !taken,
        });
        t += SLOT_STEP_MINUTES;
    }

    Ok(slots)
}

/// The earliest available slot, if any.
pub fn first_available(slots: &[Slot]) -> Option<&Slot> {
    slots.iter().find(|s| s.available)
}

pub fn count_available(slots: &[Slot]) -> usize {
    slots.iter().filter(|s| s.available).count()
}
