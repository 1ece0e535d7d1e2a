//! Booking ledger service

use std::sync::Arc;

use tracing::info;

use crate::domain::{Booking, DomainResult, NewBooking, RepositoryProvider};

/// Service for booking operations.
///
/// No check is made against the station directory and no slots are
/// decremented: a booking is a snapshot of what the client sent.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Persist a booking and return the stored record.
    pub async fn create(&self, new: NewBooking) -> DomainResult<Booking> {
        let booking = Booking::new(new);
        self.repos.bookings().save(booking.clone()).await?;
        info!(
            "Booking saved: {} (user {}, station {})",
            booking.id, booking.user_id, booking.station_name
        );
        Ok(booking)
    }
}
