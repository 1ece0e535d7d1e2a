//! In-memory repository implementations

use std::collections::BTreeSet;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::booking::{Booking, BookingRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::station::{Station, StationPatch, StationRepository};
use crate::domain::DomainResult;

/// Station directory kept in a concurrent map keyed by id
#[derive(Default)]
pub struct InMemoryStationRepository {
    stations: DashMap<String, Station>,
}

impl InMemoryStationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_where(&self, pred: impl Fn(&Station) -> bool) -> Vec<Station> {
        self.stations
            .iter()
            .filter(|e| pred(e.value()))
            .map(|e| e.value().clone())
            .collect()
    }
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn save(&self, station: Station) -> DomainResult<()> {
        self.stations.insert(station.id.clone(), station);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Station>> {
        Ok(self.collect_where(|_| true))
    }

    async fn find_by_location(&self, location: &str) -> DomainResult<Vec<Station>> {
        Ok(self.collect_where(|s| s.location == location))
    }

    async fn search_by_location(&self, needle: &str) -> DomainResult<Vec<Station>> {
        Ok(self.collect_where(|s| s.location_matches(needle)))
    }

    async fn distinct_locations(&self) -> DomainResult<Vec<String>> {
        let unique: BTreeSet<String> = self
            .stations
            .iter()
            .map(|e| e.value().location.clone())
            .collect();
        Ok(unique.into_iter().collect())
    }

    async fn update(&self, id: &str, patch: StationPatch) -> DomainResult<bool> {
        match self.stations.get_mut(id) {
            Some(mut station) => {
                station.apply(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        Ok(self.stations.remove(id).is_some())
    }
}

/// Booking ledger kept in a concurrent map keyed by id
#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: DashMap<String, Booking>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save(&self, booking: Booking) -> DomainResult<()> {
        self.bookings.insert(booking.id.clone(), booking);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        let mut all: Vec<Booking> = self.bookings.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|b| b.created_at);
        Ok(all)
    }
}

/// RepositoryProvider over the in-memory repositories
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    stations: InMemoryStationRepository,
    bookings: InMemoryBookingRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn stations(&self) -> &dyn StationRepository {
        &self.stations
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::station::{NewStation, StationStatus};

    fn station(name: &str, location: &str) -> Station {
        Station::new(NewStation {
            name: name.into(),
            location: location.into(),
            slots_available: 1,
            status: StationStatus::Open,
        })
    }

    #[tokio::test]
    async fn search_and_filter_agree_with_sql_semantics() {
        let repo = InMemoryStationRepository::new();
        repo.save(station("A", "London")).await.unwrap();
        repo.save(station("B", "LONDON")).await.unwrap();
        repo.save(station("C", "Paris")).await.unwrap();

        assert_eq!(repo.find_by_location("London").await.unwrap().len(), 1);
        assert_eq!(repo.search_by_location("lon").await.unwrap().len(), 2);
        assert_eq!(
            repo.distinct_locations().await.unwrap(),
            vec!["LONDON", "London", "Paris"]
        );
    }

    #[tokio::test]
    async fn update_and_delete_report_presence() {
        let repo = InMemoryStationRepository::new();
        let s = station("A", "London");
        repo.save(s.clone()).await.unwrap();

        let patch = StationPatch {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        assert!(repo.update(&s.id, patch.clone()).await.unwrap());
        assert!(!repo.update("nope", patch).await.unwrap());
        assert_eq!(repo.find_all().await.unwrap()[0].name, "Renamed");

        assert!(repo.delete(&s.id).await.unwrap());
        assert!(!repo.delete(&s.id).await.unwrap());
    }
}
