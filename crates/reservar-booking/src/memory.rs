//! In-memory collaborators, loadable from a JSON [`Dataset`].

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError, RwLock};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slot_engine::Interval;

use crate::collaborators::{BusinessDirectory, ReservationStore, ServiceCatalog};
use crate::error::{BookingError, Result};
use crate::model::{
    Business, BusinessId, NewReservation, PaymentStatus, Reservation, ReservationId,
    ReservationStatus, Service, ServiceId, UserId,
};

/// A snapshot of businesses, services and reservations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub businesses: Vec<Business>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Split into a directory (businesses and services) and a reservation store.
    pub fn into_collaborators(self) -> (InMemoryDirectory, InMemoryReservationStore) {
        let directory = InMemoryDirectory::new();
        for business in self.businesses {
            directory.insert_business(business);
        }
        for service in self.services {
            directory.insert_service(service);
        }
        (
            directory,
            InMemoryReservationStore::with_reservations(self.reservations),
        )
    }
}

/// Businesses and services keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    businesses: RwLock<BTreeMap<BusinessId, Business>>,
    services: RwLock<BTreeMap<ServiceId, Service>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a business.
    pub fn insert_business(&self, business: Business) {
        self.businesses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(business.id.clone(), business);
    }

    /// Insert or replace a service.
    pub fn insert_service(&self, service: Service) {
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(service.id.clone(), service);
    }

    pub fn businesses(&self) -> Vec<Business> {
        self.businesses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    pub fn services(&self) -> Vec<Service> {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }
}

impl BusinessDirectory for InMemoryDirectory {
    fn business(&self, id: &BusinessId) -> Result<Option<Business>> {
        Ok(self
            .businesses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }

    fn business_for_owner(&self, owner: &UserId) -> Result<Option<BusinessId>> {
        Ok(self
            .businesses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .find(|b| b.owner_id.as_ref() == Some(owner))
            .map(|b| b.id.clone()))
    }
}

impl ServiceCatalog for InMemoryDirectory {
    fn service(&self, id: &ServiceId) -> Result<Option<Service>> {
        Ok(self
            .services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }

    fn services_for(&self, business: &BusinessId) -> Result<Vec<Service>> {
        let mut services: Vec<Service> = self
            .services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|s| &s.business_id == business)
            .cloned()
            .collect();
        services.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(services)
    }
}

/// Reservations behind a single mutex, so the overlap check and the insert in
/// [`ReservationStore::create`] happen atomically.
#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    reservations: Mutex<Vec<Reservation>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reservations(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: Mutex::new(reservations),
        }
    }

    /// All stored reservations in insertion order.
    pub fn snapshot(&self) -> Vec<Reservation> {
        self.reservations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ReservationStore for InMemoryReservationStore {
    fn active_intervals(&self, business: &BusinessId, date: NaiveDate) -> Result<Vec<Interval>> {
        Ok(self
            .reservations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| &r.business_id == business && r.status.is_active())
            .filter_map(|r| r.interval_on(date))
            .collect())
    }

    fn create(&self, new: NewReservation) -> Result<Reservation> {
        let mut reservations = self
            .reservations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let taken = reservations.iter().any(|r| {
            r.business_id == new.business_id
                && r.status.is_active()
                && r.overlaps(new.start, new.end)
        });
        if taken {
            return Err(BookingError::SlotTaken {
                start: new.start,
                end: new.end,
            });
        }

        let reservation = Reservation {
            id: ReservationId::new_v4(),
            business_id: new.business_id,
            service_id: new.service_id,
            client_id: new.client_id,
            start: new.start,
            end: new.end,
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            notes: new.notes,
        };
        reservations.push(reservation.clone());
        Ok(reservation)
    }

    fn get(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    fn update_status(&self, id: &ReservationId, status: ReservationStatus) -> Result<Reservation> {
        let mut reservations = self
            .reservations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let reservation = reservations
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or(BookingError::ReservationNotFound(*id))?;
        reservation.status = status;
        Ok(reservation.clone())
    }

    fn for_client(&self, client: &UserId) -> Result<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self
            .reservations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| &r.client_id == client)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.start.cmp(&a.start));
        Ok(found)
    }
}
