//! Records exchanged with the booking collaborators.
//!
//! Field names follow the hosted database's column names (`opening_time`,
//! `start_time`, ...) so datasets exported from it deserialize directly.
//! Dates and datetimes are the business's local wall-clock time.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use slot_engine::{Interval, TimeOfDay};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a business in the directory.
    BusinessId
);
string_id!(
    /// Identifier of a service in the catalog.
    ServiceId
);
string_id!(
    /// Identifier of a user, either a client or a business owner.
    UserId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub Uuid);

impl ReservationId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Reservation lifecycle.
///
/// `Pending → Confirmed → Completed`, with `Cancelled` reachable from either
/// non-terminal state. `Cancelled` and `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Whether a reservation in this status occupies its time range.
    pub fn is_active(self) -> bool {
        self != ReservationStatus::Cancelled
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ReservationStatus::Cancelled | ReservationStatus::Completed)
    }

    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled) | (Confirmed, Completed)
        )
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

/// A business as listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Unset hours fall back to the configured defaults.
    #[serde(default)]
    pub opening_time: Option<TimeOfDay>,
    #[serde(default)]
    pub closing_time: Option<TimeOfDay>,
}

/// A bookable service offered by one business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub business_id: BusinessId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Minutes. Unset falls back to the configured default.
    #[serde(default, alias = "duration")]
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub business_id: BusinessId,
    pub service_id: ServiceId,
    #[serde(alias = "user_id")]
    pub client_id: UserId,
    #[serde(rename = "start_time")]
    pub start: NaiveDateTime,
    #[serde(rename = "end_time")]
    pub end: NaiveDateTime,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Reservation {
    /// The time-of-day range this reservation occupies on `date`.
    ///
    /// A reservation carried over from the previous day starts at 00:00, and
    /// one running past midnight is clipped to the last minute of the day.
    /// Returns `None` when nothing of at least one minute falls on `date`.
    pub fn interval_on(&self, date: NaiveDate) -> Option<Interval> {
        if self.start.date() > date || self.end.date() < date {
            return None;
        }
        let start = if self.start.date() == date {
            TimeOfDay::from(self.start.time())
        } else {
            TimeOfDay::MIDNIGHT
        };
        let end = if self.end.date() == date {
            TimeOfDay::from(self.end.time())
        } else {
            TimeOfDay::LAST_MINUTE
        };
        Interval::new(start, end).ok()
    }

    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end
    }
}

/// A reservation to be written; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub business_id: BusinessId,
    pub service_id: ServiceId,
    pub client_id: UserId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub notes: Option<String>,
}

/// A client's request to book a service at a given start time.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub business_id: BusinessId,
    pub service_id: ServiceId,
    pub client_id: UserId,
    pub start: NaiveDateTime,
    pub notes: Option<String>,
}
