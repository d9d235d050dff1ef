//! Half-open time intervals on a single calendar date.
//!
//! Two intervals overlap when `a.start < b.end && b.start < a.end`. Intervals
//! that only touch (one ends exactly when the other starts) do NOT overlap.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// A half-open range `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Deserialize)]
struct RawInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawInterval> for Interval {
    type Error = SlotError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Interval::new(raw.start, raw.end)
    }
}

impl Interval {
    /// # Errors
    /// Returns `SlotError::InvalidInput` if `start >= end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidInput(format!(
                "interval start {} is not before end {}",
                start, end
            )));
        }
        Ok(Interval { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes_since(self.start)
    }

    /// Half-open intersection test; adjacent intervals are not overlaps.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within `self`.
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A business's daily opening window, `opening < closing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHours")]
pub struct OperatingHours {
    opening: TimeOfDay,
    closing: TimeOfDay,
}

#[derive(Deserialize)]
struct RawHours {
    opening: TimeOfDay,
    closing: TimeOfDay,
}

impl TryFrom<RawHours> for OperatingHours {
    type Error = SlotError;

    fn try_from(raw: RawHours) -> Result<Self> {
        OperatingHours::new(raw.opening, raw.closing)
    }
}

impl OperatingHours {
    /// # Errors
    /// Returns `SlotError::InvalidConfiguration` if `opening >= closing`. The
    /// pair is never swapped or clamped.
    pub fn new(opening: TimeOfDay, closing: TimeOfDay) -> Result<Self> {
        if opening >= closing {
            return Err(SlotError::InvalidConfiguration(format!(
                "opening {} is not before closing {}",
                opening, closing
            )));
        }
        Ok(OperatingHours { opening, closing })
    }

    pub fn opening(&self) -> TimeOfDay {
        self.opening
    }

    pub fn closing(&self) -> TimeOfDay {
        self.closing
    }

    pub fn window_minutes(&self) -> i64 {
        self.closing.minutes_since(self.opening)
    }

    /// The whole opening window as an interval.
    pub fn as_interval(&self) -> Interval {
        Interval {
            start: self.opening,
            end: self.closing,
        }
    }
}
