//! Orchestrates the collaborators around the slot engine.
//!
//! The service is where defaults are applied: a business without hours gets
//! the configured opening/closing and a service without a duration gets the
//! configured duration. Malformed values that *are* set (reversed hours,
//! non-positive duration) are reported, never replaced.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use slot_engine::{compute_slots_for, Interval, OperatingHours, Slot, SlotError, TimeOfDay};
use tracing::{debug, info, warn};

use crate::cache::Cache;
use crate::collaborators::{BusinessDirectory, ReservationStore, ServiceCatalog};
use crate::config::BookingConfig;
use crate::error::{BookingError, Result};
use crate::model::{
    Business, BookingRequest, BusinessId, NewReservation, Reservation, ReservationId,
    ReservationStatus, Service, ServiceId, UserId,
};

pub struct BookingService {
    directory: Arc<dyn BusinessDirectory>,
    catalog: Arc<dyn ServiceCatalog>,
    store: Arc<dyn ReservationStore>,
    owner_cache: Arc<dyn Cache<UserId, BusinessId>>,
    config: BookingConfig,
}

impl BookingService {
    pub fn new(
        directory: Arc<dyn BusinessDirectory>,
        catalog: Arc<dyn ServiceCatalog>,
        store: Arc<dyn ReservationStore>,
        owner_cache: Arc<dyn Cache<UserId, BusinessId>>,
        config: BookingConfig,
    ) -> Self {
        Self {
            directory,
            catalog,
            store,
            owner_cache,
            config,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Slots for `service` at `business` on `date`, flagged against the
    /// reservations active at the time of the call.
    ///
    /// # Errors
    /// - `BusinessNotFound` / `ServiceNotFound` when a lookup comes back empty.
    /// - `Slot(InvalidConfiguration)` when the business's hours are reversed.
    /// - `Slot(InvalidInput)` when the service's duration is not positive.
    pub fn available_slots(
        &self,
        business_id: &BusinessId,
        service_id: &ServiceId,
        date: NaiveDate,
    ) -> Result<Vec<Slot>> {
        let business = self.business(business_id)?;
        let service = self.service_of(&business, service_id)?;
        let hours = self.operating_hours(&business)?;
        let duration = self.duration_minutes(&service);

        let booked = self.store.active_intervals(business_id, date)?;
        debug!(
            business = %business_id,
            service = %service_id,
            %date,
            booked = booked.len(),
            "computing slots"
        );
        Ok(compute_slots_for(&hours, duration, &booked)?)
    }

    /// Book `request.service_id` starting at `request.start`.
    ///
    /// The requested range must lie inside operating hours on the start date
    /// and start on the 30-minute grid anchored at opening time. The write
    /// itself fails with `SlotTaken` if another active reservation overlaps.
    pub fn book(&self, request: BookingRequest) -> Result<Reservation> {
        let business = self.business(&request.business_id)?;
        let service = self.service_of(&business, &request.service_id)?;
        let hours = self.operating_hours(&business)?;
        let duration = self.duration_minutes(&service);
        if duration <= 0 {
            return Err(SlotError::InvalidInput(format!(
                "service duration must be positive, got {} minutes",
                duration
            ))
            .into());
        }

        let start = request.start;
        let end = Duration::try_minutes(duration)
            .and_then(|d| start.checked_add_signed(d))
            .ok_or_else(|| {
                SlotError::InvalidInput(format!("service duration {} is out of range", duration))
            })?;
        let outside = || BookingError::OutsideOperatingHours {
            start,
            end,
            opening: hours.opening(),
            closing: hours.closing(),
        };
        if end.date() != start.date() {
            return Err(outside());
        }
        let requested = Interval::new(TimeOfDay::from(start.time()), TimeOfDay::from(end.time()))
            .map_err(|_| outside())?;
        if !hours.as_interval().contains(&requested) {
            return Err(outside());
        }
        let offset = requested.start().minutes_since(hours.opening());
        if offset % slot_engine::SLOT_STEP_MINUTES != 0 {
            return Err(BookingError::OffGrid {
                start,
                opening: hours.opening(),
            });
        }

        let created = self.store.create(NewReservation {
            business_id: request.business_id,
            service_id: request.service_id,
            client_id: request.client_id,
            start,
            end,
            notes: request.notes,
        });
        match created {
            Ok(reservation) => {
                info!(
                    reservation = %reservation.id,
                    business = %reservation.business_id,
                    start = %reservation.start,
                    "reservation created"
                );
                Ok(reservation)
            }
            Err(e @ BookingError::SlotTaken { .. }) => {
                warn!(%start, %end, "booking rejected: {}", e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Move a reservation along its lifecycle. Setting the current status again
    /// is a no-op.
    pub fn update_status(
        &self,
        id: &ReservationId,
        status: ReservationStatus,
    ) -> Result<Reservation> {
        let current = self
            .store
            .get(id)?
            .ok_or(BookingError::ReservationNotFound(*id))?;
        if current.status == status {
            return Ok(current);
        }
        if !current.status.can_transition_to(status) {
            return Err(BookingError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        let updated = self.store.update_status(id, status)?;
        info!(reservation = %id, from = %current.status, to = %status, "status changed");
        Ok(updated)
    }

    /// Cancel a reservation, freeing its time range.
    pub fn cancel(&self, id: &ReservationId) -> Result<Reservation> {
        self.update_status(id, ReservationStatus::Cancelled)
    }

    pub fn client_reservations(&self, client: &UserId) -> Result<Vec<Reservation>> {
        self.store.for_client(client)
    }

    pub fn business_services(&self, business_id: &BusinessId) -> Result<Vec<Service>> {
        self.catalog.services_for(business_id)
    }

    /// The business managed by `owner`, served from the owner cache when
    /// possible. Misses are not cached.
    pub fn business_for_owner(&self, owner: &UserId) -> Result<Option<BusinessId>> {
        if let Some(id) = self.owner_cache.get(owner) {
            return Ok(Some(id));
        }
        let found = self.directory.business_for_owner(owner)?;
        if let Some(id) = &found {
            self.owner_cache.set(owner.clone(), id.clone());
        }
        Ok(found)
    }

    /// Drop the cached business for `owner`, e.g. after they register or edit
    /// a business.
    pub fn forget_owner(&self, owner: &UserId) {
        self.owner_cache.invalidate(owner);
    }

    fn business(&self, id: &BusinessId) -> Result<Business> {
        self.directory
            .business(id)?
            .ok_or_else(|| BookingError::BusinessNotFound(id.clone()))
    }

    fn service_of(&self, business: &Business, id: &ServiceId) -> Result<Service> {
        match self.catalog.service(id)? {
            Some(service) if service.business_id == business.id => Ok(service),
            _ => Err(BookingError::ServiceNotFound(id.clone())),
        }
    }

    fn operating_hours(&self, business: &Business) -> Result<OperatingHours> {
        let opening = business.opening_time.unwrap_or_else(|| {
            debug!(business = %business.id, "no opening time set, using default");
            self.config.default_opening
        });
        let closing = business.closing_time.unwrap_or_else(|| {
            debug!(business = %business.id, "no closing time set, using default");
            self.config.default_closing
        });
        Ok(OperatingHours::new(opening, closing)?)
    }

    fn duration_minutes(&self, service: &Service) -> i64 {
        service.duration_minutes.unwrap_or_else(|| {
            debug!(service = %service.id, "no duration set, using default");
            self.config.default_duration_minutes
        })
    }
}
