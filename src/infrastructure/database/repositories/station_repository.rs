//! SeaORM implementation of StationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set,
};

use crate::domain::station::{Station, StationPatch, StationRepository, StationStatus};
use crate::domain::DomainResult;
use super::connected;
use crate::infrastructure::database::entities::station;

pub struct SeaOrmStationRepository {
    db: DatabaseConnection,
}

impl SeaOrmStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: station::Model) -> DomainResult<Station> {
    let status: StationStatus = m.status.parse().map_err(|_| {
        DbErr::Type(format!(
            "station {} has unknown status '{}' in storage",
            m.id, m.status
        ))
    })?;

    Ok(Station {
        id: m.id,
        name: m.name,
        location: m.location,
        slots_available: m.slots_available,
        status,
    })
}

fn models_to_domain(models: Vec<station::Model>) -> DomainResult<Vec<Station>> {
    models.into_iter().map(model_to_domain).collect()
}

// ── StationRepository impl ──────────────────────────────────────

#[async_trait]
impl StationRepository for SeaOrmStationRepository {
    async fn save(&self, s: Station) -> DomainResult<()> {
        debug!("Saving station: {} ({})", s.id, s.name);

        let model = station::ActiveModel {
            id: Set(s.id),
            name: Set(s.name),
            location: Set(s.location),
            slots_available: Set(s.slots_available),
            status: Set(s.status.as_str().to_string()),
        };
        model.insert(connected(&self.db)?).await?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Station>> {
        let models = station::Entity::find().all(connected(&self.db)?).await?;
        debug!("Fetched {} stations", models.len());
        models_to_domain(models)
    }

    async fn find_by_location(&self, location: &str) -> DomainResult<Vec<Station>> {
        let models = station::Entity::find()
            .filter(station::Column::Location.eq(location))
            .all(connected(&self.db)?)
            .await?;
        models_to_domain(models)
    }

    async fn search_by_location(&self, needle: &str) -> DomainResult<Vec<Station>> {
        // SQLite's LOWER() only folds ASCII, so matching happens here.
        let models = station::Entity::find().all(connected(&self.db)?).await?;
        let stations = models_to_domain(models)?;
        Ok(stations
            .into_iter()
            .filter(|s| s.location_matches(needle))
            .collect())
    }

    async fn distinct_locations(&self) -> DomainResult<Vec<String>> {
        let locations = station::Entity::find()
            .select_only()
            .column(station::Column::Location)
            .distinct()
            .into_tuple::<String>()
            .all(connected(&self.db)?)
            .await?;
        Ok(locations)
    }

    async fn update(&self, id: &str, patch: StationPatch) -> DomainResult<bool> {
        debug!("Updating station: {}", id);

        // Nothing to write; only report whether the station exists.
        if patch.is_empty() {
            let existing = station::Entity::find_by_id(id)
                .one(connected(&self.db)?)
                .await?;
            return Ok(existing.is_some());
        }

        let mut update = station::Entity::update_many().filter(station::Column::Id.eq(id));
        if let Some(name) = patch.name {
            update = update.col_expr(station::Column::Name, Expr::value(name));
        }
        if let Some(location) = patch.location {
            update = update.col_expr(station::Column::Location, Expr::value(location));
        }
        if let Some(slots) = patch.slots_available {
            update = update.col_expr(station::Column::SlotsAvailable, Expr::value(slots));
        }
        if let Some(status) = patch.status {
            update = update.col_expr(station::Column::Status, Expr::value(status.as_str()));
        }

        let result = update.exec(connected(&self.db)?).await?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        debug!("Deleting station: {}", id);
        let result = station::Entity::delete_by_id(id)
            .exec(connected(&self.db)?)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::station::NewStation;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use sea_orm_migration::MigratorTrait;

    async fn repo() -> SeaOrmStationRepository {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStationRepository::new(db)
    }

    fn station(name: &str, location: &str) -> Station {
        Station::new(NewStation {
            name: name.into(),
            location: location.into(),
            slots_available: 2,
            status: StationStatus::Open,
        })
    }

    #[tokio::test]
    async fn save_then_find_all_roundtrip() {
        let repo = repo().await;
        let s = station("Central", "London");
        repo.save(s.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![s]);
    }

    #[tokio::test]
    async fn exact_location_filter_is_case_sensitive() {
        let repo = repo().await;
        repo.save(station("A", "London")).await.unwrap();
        repo.save(station("B", "LONDON")).await.unwrap();

        let found = repo.find_by_location("London").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
        assert!(repo.find_by_location("Lon").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_matches_substring_ignoring_case() {
        let repo = repo().await;
        repo.save(station("A", "London")).await.unwrap();
        repo.save(station("B", "LONDON")).await.unwrap();
        repo.save(station("C", "Paris")).await.unwrap();

        let mut names: Vec<_> = repo
            .search_by_location("lon")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let repo = repo().await;
        repo.save(station("A", "London")).await.unwrap();
        assert!(repo.search_by_location("%").await.unwrap().is_empty());
        assert!(repo.search_by_location("L_ndon").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_folds_non_ascii_case() {
        let repo = repo().await;
        repo.save(station("A", "MÜNCHEN")).await.unwrap();
        repo.save(station("B", "London")).await.unwrap();

        for needle in ["MÜNCHEN", "münchen", "ü"] {
            let found = repo.search_by_location(needle).await.unwrap();
            assert_eq!(found.len(), 1, "{}", needle);
            assert_eq!(found[0].name, "A");
        }
    }

    #[tokio::test]
    async fn empty_search_matches_everything() {
        let repo = repo().await;
        repo.save(station("A", "London")).await.unwrap();
        repo.save(station("B", "Paris")).await.unwrap();
        assert_eq!(repo.search_by_location("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn distinct_locations_deduplicates() {
        let repo = repo().await;
        repo.save(station("A", "London")).await.unwrap();
        repo.save(station("B", "London")).await.unwrap();
        repo.save(station("C", "Paris")).await.unwrap();

        let mut locations = repo.distinct_locations().await.unwrap();
        locations.sort();
        assert_eq!(locations, vec!["London", "Paris"]);
    }

    #[tokio::test]
    async fn update_applies_partial_patch() {
        let repo = repo().await;
        let s = station("Central", "London");
        repo.save(s.clone()).await.unwrap();

        let patch = StationPatch {
            slots_available: Some(0),
            status: Some(StationStatus::Closed),
            ..Default::default()
        };
        assert!(repo.update(&s.id, patch).await.unwrap());

        let stored = repo.find_all().await.unwrap().remove(0);
        assert_eq!(stored.name, "Central");
        assert_eq!(stored.slots_available, 0);
        assert_eq!(stored.status, StationStatus::Closed);
    }

    #[tokio::test]
    async fn update_reports_missing_station() {
        let repo = repo().await;
        let patch = StationPatch {
            name: Some("X".into()),
            ..Default::default()
        };
        assert!(!repo.update("missing", patch).await.unwrap());
        assert!(!repo.update("missing", StationPatch::default()).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_once() {
        let repo = repo().await;
        let s = station("Central", "London");
        repo.save(s.clone()).await.unwrap();

        assert!(repo.delete(&s.id).await.unwrap());
        assert!(!repo.delete(&s.id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn disconnected_database_surfaces_error() {
        let repo = SeaOrmStationRepository::new(DatabaseConnection::Disconnected);
        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, crate::domain::DomainError::Database(_)));
    }
}
