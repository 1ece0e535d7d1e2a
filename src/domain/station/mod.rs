//! Station aggregate
//!
//! Contains the Station entity, related types, and repository interface.

pub mod model;
pub mod repository;

pub use model::{NewStation, Station, StationPatch, StationStatus};
pub use repository::StationRepository;
