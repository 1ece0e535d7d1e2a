//! Domain layer
//!
//! One module per aggregate (model + repository trait), plus the
//! `RepositoryProvider` that hands out per-aggregate repositories.

pub mod booking;
pub mod repositories;
pub mod station;

pub use booking::{Booking, BookingRepository, NewBooking};
pub use repositories::RepositoryProvider;
pub use station::{NewStation, Station, StationPatch, StationRepository, StationStatus};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::{DomainError, DomainResult};
