//! # reservar-booking
//!
//! The booking layer around [`slot_engine`]: it resolves a business's hours
//! and a service's duration from their collaborators, reads the day's active
//! reservations, asks the engine for slots, and writes new reservations.
//!
//! ## Modules
//!
//! - [`model`] -- Businesses, services, reservations and their ids
//! - [`collaborators`] -- Directory, catalog and reservation store contracts
//! - [`memory`] -- In-memory collaborators and the JSON `Dataset`
//! - [`service`] -- `BookingService`, the orchestration entry point
//! - [`cache`] -- Injected key/value cache
//! - [`config`] -- Fallback hours and duration
//! - [`error`] -- Error types

pub mod cache;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod memory;
pub mod model;
pub mod service;

pub use cache::{Cache, InMemoryCache};
pub use collaborators::{BusinessDirectory, ReservationStore, ServiceCatalog};
pub use config::BookingConfig;
pub use error::BookingError;
pub use memory::{Dataset, InMemoryDirectory, InMemoryReservationStore};
pub use model::{
    BookingRequest, Business, BusinessId, NewReservation, PaymentStatus, Reservation,
    ReservationId, ReservationStatus, Service, ServiceId, UserId,
};
pub use service::BookingService;
