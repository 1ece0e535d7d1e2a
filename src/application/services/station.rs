//! Station directory service
//!
//! HTTP handlers are thin wrappers that delegate here. Each operation issues
//! exactly one repository call.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    DomainError, DomainResult, NewStation, RepositoryProvider, Station, StationPatch,
};

/// Service for station directory operations
pub struct StationService {
    repos: Arc<dyn RepositoryProvider>,
    strict_updates: bool,
}

impl StationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            strict_updates: false,
        }
    }

    /// Report `NotFound` from [`update`](Self::update) when the id matches
    /// nothing, instead of treating it as success.
    pub fn with_strict_updates(mut self, strict: bool) -> Self {
        self.strict_updates = strict;
        self
    }

    /// Every station. An empty directory is an empty list, not an error.
    pub async fn list_all(&self) -> DomainResult<Vec<Station>> {
        self.repos.stations().find_all().await
    }

    /// Unique locations across the directory
    pub async fn list_locations(&self) -> DomainResult<Vec<String>> {
        self.repos.stations().distinct_locations().await
    }

    /// Stations at exactly `location`; `NotFound` when there are none.
    pub async fn find_by_location(&self, location: &str) -> DomainResult<Vec<Station>> {
        let stations = self.repos.stations().find_by_location(location).await?;
        if stations.is_empty() {
            return Err(DomainError::not_found("Station", "location", location));
        }
        Ok(stations)
    }

    /// Stations whose location contains `needle` (case-insensitive);
    /// `NotFound` when there are none. The needle is used verbatim, so an
    /// empty one matches every station.
    pub async fn search_by_location(&self, needle: &str) -> DomainResult<Vec<Station>> {
        let stations = self.repos.stations().search_by_location(needle).await?;
        if stations.is_empty() {
            return Err(DomainError::not_found("Station", "location", needle));
        }
        Ok(stations)
    }

    /// Register a new station and return it with its generated id.
    pub async fn create(&self, new: NewStation) -> DomainResult<Station> {
        let station = Station::new(new);
        self.repos.stations().save(station.clone()).await?;
        info!(
            "Station added: {} ({} at {})",
            station.id, station.name, station.location
        );
        Ok(station)
    }

    pub async fn update(&self, id: &str, patch: StationPatch) -> DomainResult<()> {
        let found = self.repos.stations().update(id, patch).await?;
        if !found {
            if self.strict_updates {
                return Err(DomainError::not_found("Station", "id", id));
            }
            warn!("Update for unknown station {} reported as success", id);
        }
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        if !self.repos.stations().delete(id).await? {
            return Err(DomainError::not_found("Station", "id", id));
        }
        info!("Station deleted: {}", id);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
