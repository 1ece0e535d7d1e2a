//! Shared HTTP building blocks

mod error;
mod validated_json;

pub use error::{ApiError, ErrorResponse, MessageResponse};
pub use validated_json::ValidatedJson;
