//! # Station Service
//!
//! REST API for a directory of charging/parking stations and a ledger of
//! bookings made against them.
//!
//! ## Architecture
//!
//! - **domain**: Station and Booking entities, repository traits
//! - **application**: Use-case services the HTTP layer delegates to
//! - **infrastructure**: SeaORM persistence (entities, migrations, repositories)
//!   and an in-memory store for development and tests
//! - **interfaces**: Axum router, handlers, DTOs and error mapping
//! - **server**: Process lifecycle (database, listener, graceful shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
