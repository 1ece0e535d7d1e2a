//! Booking repository interface

use async_trait::async_trait;

use super::model::Booking;
use crate::domain::DomainResult;

/// Append-only ledger of bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking
    async fn save(&self, booking: Booking) -> DomainResult<()>;

    /// Every booking in the ledger
    async fn find_all(&self) -> DomainResult<Vec<Booking>>;
}
