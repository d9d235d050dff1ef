//! Wall-clock time of day with minute granularity.
//!
//! A [`TimeOfDay`] is stored as minutes since midnight and is always in the
//! range `0..1440`. It parses from and displays as `HH:MM`, which is also its
//! serialized form. Seconds in `HH:MM:SS` input are truncated, matching how
//! `time` columns come back from the reservation database.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// Number of minutes in a day; the exclusive upper bound of [`TimeOfDay`].
pub const MINUTES_PER_DAY: u16 = 1440;

/// Minutes since midnight, `0 <= value < 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// 00:00
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    /// 23:59, the last representable minute of a day.
    pub const LAST_MINUTE: TimeOfDay = TimeOfDay(MINUTES_PER_DAY - 1);

    /// Build from minutes since midnight.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTime` if `minutes` is negative or `>= 1440`.
    pub fn from_minutes(minutes: i64) -> Result<Self> {
        if (0..i64::from(MINUTES_PER_DAY)).contains(&minutes) {
            Ok(TimeOfDay(minutes as u16))
        } else {
            Err(SlotError::InvalidTime(format!(
                "{} minutes is outside 0..{}",
                minutes, MINUTES_PER_DAY
            )))
        }
    }

    /// Compile-time constructor for fixed times such as defaults.
    ///
    /// # Panics
    /// Panics if `hour > 23` or `minute > 59`; in a `const` item that is a
    /// compile error. Use [`TimeOfDay::from_hm`] for runtime values.
    pub const fn hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "hour or minute out of range");
        TimeOfDay(hour * 60 + minute)
    }

    /// Build from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!(
                "{:02}:{:02} is not a wall-clock time",
                hour, minute
            )));
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }

    /// Add `minutes`, returning `None` if the result leaves the day.
    pub fn checked_add_minutes(self, minutes: i64) -> Option<Self> {
        TimeOfDay::from_minutes(i64::from(self.0) + minutes).ok()
    }

    /// Signed minutes from `earlier` to `self`.
    pub fn minutes_since(self, earlier: TimeOfDay) -> i64 {
        i64::from(self.0) - i64::from(earlier.0)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // Always in range by construction.
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds and sub-second precision.
    fn from(t: NaiveTime) -> Self {
        TimeOfDay((t.hour() * 60 + t.minute()) as u16)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Parse `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTime(format!("'{}' is not HH:MM", s));

        // Digits only; `u32::from_str` alone would also take a leading '+'.
        let digits = |field: &str, min: usize, max: usize| {
            (min..=max).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
        };

        let mut parts = s.trim().split(':');
        let hour = parts.next().ok_or_else(invalid)?;
        let minute = parts.next().ok_or_else(invalid)?;
        if let Some(second) = parts.next() {
            if !digits(second, 2, 2) {
                return Err(invalid());
            }
            let second: u32 = second.parse().map_err(|_| invalid())?;
            if second > 59 {
                return Err(invalid());
            }
        }
        if parts.next().is_some() || !digits(hour, 1, 2) || !digits(minute, 2, 2) {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        TimeOfDay::from_hm(hour, minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
