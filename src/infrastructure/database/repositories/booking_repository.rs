//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::booking::{Booking, BookingRepository};
use crate::domain::DomainResult;
use super::connected;
use crate::infrastructure::database::entities::booking;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        station_name: m.station_name,
        location: m.location,
        slots_available: m.slots_available,
        status: m.status,
        user_id: m.user_id,
        created_at: m.created_at,
    }
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn save(&self, b: Booking) -> DomainResult<()> {
        debug!("Saving booking {} for user {}", b.id, b.user_id);

        let model = booking::ActiveModel {
            id: Set(b.id),
            station_name: Set(b.station_name),
            location: Set(b.location),
            slots_available: Set(b.slots_available),
            status: Set(b.status),
            user_id: Set(b.user_id),
            created_at: Set(b.created_at),
        };
        model.insert(connected(&self.db)?).await?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .order_by_asc(booking::Column::CreatedAt)
            .all(connected(&self.db)?)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
