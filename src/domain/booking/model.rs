//! Booking domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user's reservation snapshot against a station.
///
/// Station fields are copied at booking time; nothing links a booking back
/// to a live station record.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub station_name: String,
    pub location: String,
    pub slots_available: i32,
    pub status: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Booking data supplied by a client, already checked for presence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub station_name: String,
    pub location: String,
    pub slots_available: i32,
    pub status: String,
    pub user_id: i64,
    /// Defaults to the current time when absent
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn new(new: NewBooking) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            station_name: new.station_name,
            location: new.location,
            slots_available: new.slots_available,
            status: new.status,
            user_id: new.user_id,
            created_at: new.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_booking(created_at: Option<DateTime<Utc>>) -> NewBooking {
        NewBooking {
            station_name: "Central".into(),
            location: "London".into(),
            slots_available: 3,
            status: "Open".into(),
            user_id: 42,
            created_at,
        }
    }

    #[test]
    fn created_at_defaults_to_now() {
        let before = Utc::now();
        let booking = Booking::new(new_booking(None));
        let after = Utc::now();

        assert!(booking.created_at >= before && booking.created_at <= after);
        assert_eq!(booking.user_id, 42);
        assert_eq!(booking.station_name, "Central");
    }

    #[test]
    fn explicit_created_at_is_kept() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let booking = Booking::new(new_booking(Some(at)));
        assert_eq!(booking.created_at, at);
    }

    #[test]
    fn each_booking_gets_its_own_id() {
        let a = Booking::new(new_booking(None));
        let b = Booking::new(new_booking(None));
        assert_ne!(a.id, b.id);
    }
}
