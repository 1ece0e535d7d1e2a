//! Station REST API handlers

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use super::dto::{CreateStationRequest, SearchStationsParams, StationDto, UpdateStationRequest};
use crate::application::StationService;
use crate::interfaces::http::common::{ApiError, ErrorResponse, MessageResponse, ValidatedJson};

/// State for station handlers
#[derive(Clone)]
pub struct StationAppState {
    pub service: Arc<StationService>,
}

fn to_dtos(stations: Vec<crate::domain::Station>) -> Json<Vec<StationDto>> {
    Json(stations.into_iter().map(Into::into).collect())
}

#[utoipa::path(
    get,
    path = "/stations",
    tag = "Stations",
    responses(
        (status = 200, description = "All stations", body = Vec<StationDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_stations(
    State(state): State<StationAppState>,
) -> Result<Json<Vec<StationDto>>, ApiError> {
    state
        .service
        .list_all()
        .await
        .map(to_dtos)
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch stations"))
}

#[utoipa::path(
    get,
    path = "/locations",
    tag = "Stations",
    responses(
        (status = 200, description = "Distinct station locations", body = Vec<String>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_locations(
    State(state): State<StationAppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    state
        .service
        .list_locations()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch locations"))
}

#[utoipa::path(
    get,
    path = "/stations/location/{location_name}",
    tag = "Stations",
    params(("location_name" = String, Path, description = "Exact location")),
    responses(
        (status = 200, description = "Stations at the location", body = Vec<StationDto>),
        (status = 404, description = "No station at the location", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn stations_by_location(
    State(state): State<StationAppState>,
    location_name: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<StationDto>>, ApiError> {
    let Path(location_name) = location_name?;
    state
        .service
        .find_by_location(&location_name)
        .await
        .map(to_dtos)
        .map_err(|e| {
            ApiError::from_domain(e, "Failed to fetch stations")
                .with_not_found_message("No stations found for the selected location")
        })
}

#[utoipa::path(
    get,
    path = "/stations/search",
    tag = "Stations",
    params(SearchStationsParams),
    responses(
        (status = 200, description = "Matching stations", body = Vec<StationDto>),
        (status = 400, description = "Missing location parameter", body = ErrorResponse),
        (status = 404, description = "No match", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn search_stations(
    State(state): State<StationAppState>,
    params: Result<Query<SearchStationsParams>, QueryRejection>,
) -> Result<Json<Vec<StationDto>>, ApiError> {
    let Query(params) = params?;
    let needle = params
        .location
        .ok_or_else(|| ApiError::bad_request("location query parameter is required"))?;
    state
        .service
        .search_by_location(&needle)
        .await
        .map(to_dtos)
        .map_err(|e| {
            ApiError::from_domain(e, "Failed to fetch stations")
                .with_not_found_message("No stations found for the given location")
        })
}

#[utoipa::path(
    post,
    path = "/stations",
    tag = "Stations",
    request_body = CreateStationRequest,
    responses(
        (status = 201, description = "Station added", body = MessageResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_station(
    State(state): State<StationAppState>,
    ValidatedJson(req): ValidatedJson<CreateStationRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .service
        .create(req.into())
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to add station"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Station added successfully")),
    ))
}

#[utoipa::path(
    put,
    path = "/stations/{id}",
    tag = "Stations",
    params(("id" = String, Path, description = "Station ID")),
    request_body = UpdateStationRequest,
    responses(
        (status = 200, description = "Station updated", body = MessageResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 404, description = "Unknown station (strict mode only)", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_station(
    State(state): State<StationAppState>,
    id: Result<Path<String>, PathRejection>,
    ValidatedJson(req): ValidatedJson<UpdateStationRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state
        .service
        .update(&id, req.into())
        .await
        .map_err(|e| {
            ApiError::from_domain(e, "Failed to update station")
                .with_not_found_message("Station not found")
        })?;

    Ok(Json(MessageResponse::new("Station updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/stations/{id}",
    tag = "Stations",
    params(("id" = String, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Station deleted", body = MessageResponse),
        (status = 404, description = "Unknown station", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_station(
    State(state): State<StationAppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state.service.delete(&id).await.map_err(|e| {
        ApiError::from_domain(e, "Failed to delete station").with_not_found_message("Station not found")
    })?;

    Ok(Json(MessageResponse::new("Station deleted successfully")))
}
