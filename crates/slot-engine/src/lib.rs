//! # slot-engine
//!
//! Deterministic bookable-slot computation for reserv-ar businesses.
//!
//! Given a business's operating hours, a service duration and the intervals of
//! its active reservations for one day, the engine lays candidate slots on a
//! fixed 30-minute grid and flags each one available or taken. It is a pure
//! function: no I/O, no shared state, identical output for identical input.
//!
//! ## Modules
//!
//! - [`time`] -- `TimeOfDay` (minutes since midnight, `HH:MM` text form)
//! - [`interval`] -- Half-open `Interval` and validated `OperatingHours`
//! - [`slots`] -- `compute_slots` and slot helpers
//! - [`error`] -- Error types

pub mod error;
pub mod interval;
pub mod slots;
pub mod time;

pub use error::SlotError;
pub use interval::{Interval, OperatingHours};
pub use slots::{
    compute_slots, compute_slots_for, count_available, first_available, Slot, SLOT_STEP_MINUTES,
};
pub use time::TimeOfDay;
