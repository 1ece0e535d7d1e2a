//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, StationService};
use crate::config::ApiConfig;
use crate::domain::{RepositoryProvider, StationStatus};
use crate::interfaces::http::common::{ErrorResponse, MessageResponse};

use super::modules::{bookings, health, stations};

/// Unified state for every route.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub stations: Arc<StationService>,
    pub bookings: Arc<BookingService>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

impl FromRef<AppState> for stations::StationAppState {
    fn from_ref(s: &AppState) -> Self {
        stations::StationAppState {
            service: Arc::clone(&s.stations),
        }
    }
}

impl FromRef<AppState> for bookings::BookingAppState {
    fn from_ref(s: &AppState) -> Self {
        bookings::BookingAppState {
            service: Arc::clone(&s.bookings),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Stations
        stations::list_stations,
        stations::list_locations,
        stations::stations_by_location,
        stations::search_stations,
        stations::create_station,
        stations::update_station,
        stations::delete_station,
        // Bookings
        bookings::create_booking,
    ),
    components(
        schemas(
            // Common
            ErrorResponse,
            MessageResponse,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Stations
            StationStatus,
            stations::StationDto,
            stations::CreateStationRequest,
            stations::UpdateStationRequest,
            // Bookings
            bookings::BookingDto,
            bookings::CreateBookingRequest,
            bookings::CreateBookingResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Stations", description = "Charging station directory: listing, filtering, CRUD"),
        (name = "Bookings", description = "Booking ledger"),
    ),
    info(
        title = "Charging Station API",
        version = "1.0.0",
        description = "REST API for browsing charging stations and recording bookings",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `db` is only used by the health check; every data route goes through
/// `repos`.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    api: &ApiConfig,
) -> Router {
    let state = AppState {
        stations: Arc::new(
            StationService::new(repos.clone()).with_strict_updates(api.strict_updates),
        ),
        bookings: Arc::new(BookingService::new(repos)),
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Stations
        .route(
            "/stations",
            get(stations::list_stations).post(stations::create_station),
        )
        .route("/stations/search", get(stations::search_stations))
        .route(
            "/stations/location/{location_name}",
            get(stations::stations_by_location),
        )
        .route(
            "/stations/{id}",
            put(stations::update_station).delete(stations::delete_station),
        )
        .route("/locations", get(stations::list_locations))
        // Bookings
        .route("/bookings", post(bookings::create_booking))
        .with_state(state)
        // Swagger UI
        .merge(swagger_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn app() -> Router {
        create_api_router(
            Arc::new(InMemoryRepositoryProvider::new()),
            DatabaseConnection::Disconnected,
            &ApiConfig::default(),
        )
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/health",
            "/stations",
            "/stations/search",
            "/stations/location/{location_name}",
            "/stations/{id}",
            "/locations",
            "/bookings",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }
    }

    #[tokio::test]
    async fn openapi_json_is_served() {
        let (status, body) = get_json(app(), "/api-doc/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Charging Station API");
    }

    #[tokio::test]
    async fn health_is_200_even_when_database_is_down() {
        let (status, body) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["database"]["status"], "error");
    }

    #[tokio::test]
    async fn search_without_location_is_400() {
        let (status, body) = get_json(app(), "/stations/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn malformed_query_string_is_json_400() {
        let (status, body) = get_json(app(), "/stations/search?location=a&location=b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("location"));
    }

    #[tokio::test]
    async fn undecodable_path_parameter_is_json_400() {
        let (status, body) = get_json(app(), "/stations/location/%FF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/stations")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
