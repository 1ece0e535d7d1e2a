//! Station DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{NewStation, Station, StationPatch, StationStatus};

/// Station as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    /// Generated identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub location: String,
    pub slots_available: i32,
    pub status: StationStatus,
}

impl From<Station> for StationDto {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            name: s.name,
            location: s.location,
            slots_available: s.slots_available,
            status: s.status,
        }
    }
}

/// Request to register a station. All fields are required.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "name": "Central Car Park",
    "location": "London",
    "slotsAvailable": 12,
    "status": "Open"
}))]
pub struct CreateStationRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub slots_available: i32,
    /// `Open` or `Closed`
    pub status: StationStatus,
}

impl From<CreateStationRequest> for NewStation {
    fn from(r: CreateStationRequest) -> Self {
        Self {
            name: r.name,
            location: r.location,
            slots_available: r.slots_available,
            status: r.status,
        }
    }
}

/// Partial station update. Only the fields present are changed.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStationRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub slots_available: Option<i32>,
    pub status: Option<StationStatus>,
}

impl From<UpdateStationRequest> for StationPatch {
    fn from(r: UpdateStationRequest) -> Self {
        Self {
            name: r.name,
            location: r.location,
            slots_available: r.slots_available,
            status: r.status,
        }
    }
}

/// Query for `GET /stations/search`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchStationsParams {
    /// Case-insensitive substring of the station location
    pub location: Option<String>,
}
