//! Booking REST API handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use super::dto::{BookingDto, CreateBookingRequest, CreateBookingResponse};
use crate::application::BookingService;
use crate::domain::NewBooking;
use crate::interfaces::http::common::{ApiError, ErrorResponse};

/// State for booking handlers
#[derive(Clone)]
pub struct BookingAppState {
    pub service: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking saved", body = CreateBookingResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    body: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), ApiError> {
    let Json(req) = body?;

    let new = NewBooking::try_from(req).map_err(|_| {
        warn!("Booking rejected: missing required fields");
        ApiError::bad_request("Missing required fields")
    })?;

    let booking = state
        .service
        .create(new)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to save booking"))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            message: "Booking saved successfully".to_string(),
            booking: BookingDto::from(booking),
        }),
    ))
}
