//! Station directory module: listing, filtering, CRUD

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
