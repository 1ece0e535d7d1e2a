//! Station domain entity

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::errors::DomainError;

/// Station availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum StationStatus {
    Open,
    Closed,
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

impl FromStr for StationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            other => Err(DomainError::Validation(format!(
                "status must be Open or Closed, got '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A charging/parking station in the directory
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Generated on creation, never changes
    pub id: String,
    pub name: String,
    pub location: String,
    pub slots_available: i32,
    pub status: StationStatus,
}

/// Fields required to register a station
#[derive(Debug, Clone, PartialEq)]
pub struct NewStation {
    pub name: String,
    pub location: String,
    pub slots_available: i32,
    pub status: StationStatus,
}

impl Station {
    /// Build a station with a freshly generated identifier.
    pub fn new(new: NewStation) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            location: new.location,
            slots_available: new.slots_available,
            status: new.status,
        }
    }

    /// Case-insensitive substring match on the location. An empty needle
    /// matches every station.
    pub fn location_matches(&self, needle: &str) -> bool {
        self.location
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: StationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(slots) = patch.slots_available {
            self.slots_available = slots;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Partial update of a station. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub slots_available: Option<i32>,
    pub status: Option<StationStatus>,
}

impl StationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.slots_available.is_none()
            && self.status.is_none()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_station() -> Station {
        Station::new(NewStation {
            name: "Central".into(),
            location: "London".into(),
            slots_available: 4,
            status: StationStatus::Open,
        })
    }

    #[test]
    fn new_station_gets_unique_id() {
        let a = sample_station();
        let b = sample_station();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn apply_patch_changes_only_given_fields() {
        let mut station = sample_station();
        let id = station.id.clone();

        station.apply(StationPatch {
            slots_available: Some(0),
            status: Some(StationStatus::Closed),
            ..Default::default()
        });

        assert_eq!(station.id, id);
        assert_eq!(station.name, "Central");
        assert_eq!(station.location, "London");
        assert_eq!(station.slots_available, 0);
        assert_eq!(station.status, StationStatus::Closed);
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut station = sample_station();
        let before = station.clone();
        let patch = StationPatch::default();
        assert!(patch.is_empty());
        station.apply(patch);
        assert_eq!(station, before);
    }

    #[test]
    fn location_match_folds_unicode_case() {
        let mut station = sample_station();
        station.location = "MÜNCHEN Hbf".into();
        assert!(station.location_matches("münchen"));
        assert!(station.location_matches("ü"));
        assert!(station.location_matches(" hbf"));
        assert!(station.location_matches(""));
        assert!(!station.location_matches("munchen"));
    }

    #[test]
    fn status_parses_exact_names_only() {
        assert_eq!("Open".parse::<StationStatus>().unwrap(), StationStatus::Open);
        assert_eq!("Closed".parse::<StationStatus>().unwrap(), StationStatus::Closed);
        assert!("open".parse::<StationStatus>().is_err());
        assert!("Maintenance".parse::<StationStatus>().is_err());
    }

    #[test]
    fn status_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&StationStatus::Closed).unwrap(), "\"Closed\"");
        let parsed: StationStatus = serde_json::from_str("\"Open\"").unwrap();
        assert_eq!(parsed, StationStatus::Open);
        assert!(serde_json::from_str::<StationStatus>("\"Unknown\"").is_err());
    }
}
