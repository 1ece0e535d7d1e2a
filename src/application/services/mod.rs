//! Application services

mod booking;
mod station;

pub use booking::BookingService;
pub use station::StationService;
