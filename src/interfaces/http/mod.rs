//! HTTP REST API interfaces
//!
//! - `common`: Shared response bodies, error mapping, validated JSON extractor
//! - `modules`: Per-resource DTOs and handlers
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
