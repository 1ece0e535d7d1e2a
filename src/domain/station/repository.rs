//! Station repository interface

use async_trait::async_trait;

use super::model::{Station, StationPatch};
use crate::domain::DomainResult;

#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Save a new station
    async fn save(&self, station: Station) -> DomainResult<()>;

    /// All stations, in whatever order storage yields them
    async fn find_all(&self) -> DomainResult<Vec<Station>>;

    /// Stations whose location equals `location` exactly
    async fn find_by_location(&self, location: &str) -> DomainResult<Vec<Station>>;

    /// Stations whose location contains `needle`, ignoring case
    async fn search_by_location(&self, needle: &str) -> DomainResult<Vec<Station>>;

    /// Unique location values across all stations
    async fn distinct_locations(&self) -> DomainResult<Vec<String>>;

    /// Apply `patch` to the station with `id`.
    ///
    /// Returns `false` when no station has that id.
    async fn update(&self, id: &str, patch: StationPatch) -> DomainResult<bool>;

    /// Remove the station with `id`. Returns `false` when it did not exist.
    async fn delete(&self, id: &str) -> DomainResult<bool>;
}
