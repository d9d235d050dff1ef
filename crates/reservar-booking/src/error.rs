//! Error types for the booking layer.

use chrono::NaiveDateTime;
use slot_engine::{SlotError, TimeOfDay};
use thiserror::Error;

use crate::model::{BusinessId, ReservationId, ReservationStatus, ServiceId};

#[derive(Error, Debug)]
pub enum BookingError {
    /// The slot engine rejected the schedule or duration.
    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error("Business not found: {0}")]
    BusinessNotFound(BusinessId),

    /// The service does not exist or belongs to a different business.
    #[error("Service not found: {0}")]
    ServiceNotFound(ServiceId),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    /// Another active reservation already holds part of the requested time.
    #[error("Requested time {start} - {end} overlaps an existing reservation")]
    SlotTaken {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Requested time {start} - {end} is outside operating hours {opening} - {closing}")]
    OutsideOperatingHours {
        start: NaiveDateTime,
        end: NaiveDateTime,
        opening: TimeOfDay,
        closing: TimeOfDay,
    },

    /// The requested start is not on the business's 30-minute booking grid.
    #[error("Requested start {start} is not on the booking grid starting at {opening}")]
    OffGrid {
        start: NaiveDateTime,
        opening: TimeOfDay,
    },

    #[error("Cannot change reservation status from {from} to {to}")]
    InvalidTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BookingError>;
