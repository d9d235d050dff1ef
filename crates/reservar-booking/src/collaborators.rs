//! Contracts for the external systems the booking layer reads and writes.
//!
//! In production these are backed by the hosted database; the crate ships
//! in-memory implementations in [`crate::memory`].

use chrono::NaiveDate;
use slot_engine::Interval;

use crate::error::Result;
use crate::model::{
    Business, BusinessId, NewReservation, Reservation, ReservationId, ReservationStatus, Service,
    ServiceId, UserId,
};

/// Supplies businesses and their operating hours.
pub trait BusinessDirectory: Send + Sync {
    fn business(&self, id: &BusinessId) -> Result<Option<Business>>;

    /// The business managed by `owner`, if any.
    fn business_for_owner(&self, owner: &UserId) -> Result<Option<BusinessId>>;
}

/// Supplies services and their durations.
pub trait ServiceCatalog: Send + Sync {
    fn service(&self, id: &ServiceId) -> Result<Option<Service>>;

    /// Services offered by `business`, ordered by name.
    fn services_for(&self, business: &BusinessId) -> Result<Vec<Service>>;
}

/// Persists reservations.
///
/// `create` must reject a reservation overlapping an active reservation of the
/// same business with `BookingError::SlotTaken`. This check is the only guard
/// against two clients booking the same slot from the same availability
/// snapshot.
pub trait ReservationStore: Send + Sync {
    /// Intervals of non-cancelled reservations that fall on `date`, clipped
    /// to the day.
    fn active_intervals(&self, business: &BusinessId, date: NaiveDate) -> Result<Vec<Interval>>;

    fn create(&self, reservation: NewReservation) -> Result<Reservation>;

    fn get(&self, id: &ReservationId) -> Result<Option<Reservation>>;

    fn update_status(&self, id: &ReservationId, status: ReservationStatus) -> Result<Reservation>;

    /// A client's reservations, most recent start first.
    fn for_client(&self, client: &UserId) -> Result<Vec<Reservation>>;
}
