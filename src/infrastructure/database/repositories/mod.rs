//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod booking_repository;
pub mod repository_provider;
pub mod station_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DatabaseConnection, DbErr, RuntimeErr};

/// The live connection, or a connection error when startup never reached
/// the database.
pub(crate) fn connected(db: &DatabaseConnection) -> Result<&DatabaseConnection, DbErr> {
    match db {
        DatabaseConnection::Disconnected => Err(DbErr::Conn(RuntimeErr::Internal(
            "database is disconnected".to_string(),
        ))),
        db => Ok(db),
    }
}
