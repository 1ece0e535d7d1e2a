//! Booking DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Booking, NewBooking};

/// Booking as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub station_name: String,
    pub location: String,
    pub slots_available: i32,
    pub status: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            station_name: b.station_name,
            location: b.location,
            slots_available: b.slots_available,
            status: b.status,
            user_id: b.user_id,
            created_at: b.created_at,
        }
    }
}

/// Booking request.
///
/// Every field except `createdAt` must be present and non-empty; zero counts
/// as empty for the numeric fields.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "stationName": "Central Car Park",
    "location": "London",
    "slotsAvailable": 12,
    "status": "Open",
    "userId": 42
}))]
pub struct CreateBookingRequest {
    pub station_name: Option<String>,
    pub location: Option<String>,
    pub slots_available: Option<i32>,
    pub status: Option<String>,
    pub user_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Error returned when a booking request lacks a required field
#[derive(Debug, PartialEq, Eq)]
pub struct MissingFields;

fn present(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

impl TryFrom<CreateBookingRequest> for NewBooking {
    type Error = MissingFields;

    fn try_from(r: CreateBookingRequest) -> Result<Self, Self::Error> {
        Ok(NewBooking {
            station_name: present(r.station_name).ok_or(MissingFields)?,
            location: present(r.location).ok_or(MissingFields)?,
            slots_available: r.slots_available.filter(|n| *n != 0).ok_or(MissingFields)?,
            status: present(r.status).ok_or(MissingFields)?,
            user_id: r.user_id.filter(|n| *n != 0).ok_or(MissingFields)?,
            created_at: r.created_at,
        })
    }
}

/// Response to a saved booking
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingResponse {
    pub message: String,
    pub booking: BookingDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> CreateBookingRequest {
        CreateBookingRequest {
            station_name: Some("Central".into()),
            location: Some("London".into()),
            slots_available: Some(3),
            status: Some("Open".into()),
            user_id: Some(42),
            created_at: None,
        }
    }

    #[test]
    fn complete_request_converts() {
        let new = NewBooking::try_from(complete()).unwrap();
        assert_eq!(new.user_id, 42);
        assert!(new.created_at.is_none());
    }

    #[test]
    fn empty_or_zero_fields_are_missing() {
        let cases = [
            CreateBookingRequest {
                user_id: None,
                ..complete()
            },
            CreateBookingRequest {
                user_id: Some(0),
                ..complete()
            },
            CreateBookingRequest {
                slots_available: Some(0),
                ..complete()
            },
            CreateBookingRequest {
                station_name: Some(String::new()),
                ..complete()
            },
            CreateBookingRequest {
                status: None,
                ..complete()
            },
        ];

        for req in cases {
            assert_eq!(NewBooking::try_from(req), Err(MissingFields));
        }
    }

    #[test]
    fn request_reads_camel_case_and_null() {
        let req: CreateBookingRequest = serde_json::from_value(serde_json::json!({
            "stationName": "Central",
            "location": null,
            "userId": 5
        }))
        .unwrap();
        assert_eq!(req.station_name.as_deref(), Some("Central"));
        assert!(req.location.is_none());
        assert_eq!(req.user_id, Some(5));
    }
}
