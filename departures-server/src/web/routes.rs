//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::domain::{Coordinate, Departure, StationRef};
use crate::pipeline::{self, DepartureProvider, ProviderError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/departures",
            get(nearby_departures).post(station_departures),
        )
        .route("/api/geocode", post(geocode_address))
        .route("/api/station", post(resolve_station))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Validate that both coordinate components are present.
///
/// Runs before any upstream call; a request missing either component is
/// rejected without touching a provider.
fn require_coords(lat: Option<f64>, lng: Option<f64>) -> Result<Coordinate, AppError> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Coordinate::new(lat, lng)),
        _ => Err(AppError::BadRequest {
            message: "Latitude and Longitude are required".to_string(),
        }),
    }
}

/// `GET /api/departures?lat=..&lng=..`
///
/// The coordinate-only pipeline: nearest stop and its board from the JSON
/// provider, in one chained request pair.
async fn nearby_departures(
    State(state): State<AppState>,
    Query(query): Query<DeparturesQuery>,
) -> Result<Json<BoardResponse>, AppError> {
    let coords = require_coords(query.lat, query.lng)?;

    let board = pipeline::fetch_board(state.resrobot.as_ref(), coords).await?;

    Ok(Json(BoardResponse {
        station: board.station,
        departures: board.departures,
    }))
}

/// `POST /api/geocode` — address to coordinates.
async fn geocode_address(
    State(state): State<AppState>,
    Json(req): Json<GeocodeRequest>,
) -> Result<Json<GeocodeResponse>, AppError> {
    let address = req
        .address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "address is required".to_string(),
        })?;

    let coords = state
        .geocoder
        .resolve(address)
        .await
        .map_err(ProviderError::from)?;

    Ok(Json(GeocodeResponse {
        lat: coords.latitude,
        lng: coords.longitude,
    }))
}

/// `POST /api/station` — coordinates to location signature.
async fn resolve_station(
    State(state): State<AppState>,
    Json(req): Json<StationRequest>,
) -> Result<Json<StationResponse>, AppError> {
    let coords = require_coords(req.latitude, req.longitude)?;

    let station = state.trafikverket.resolve_station(coords).await?;

    Ok(Json(StationResponse {
        signature: station.id().to_string(),
    }))
}

/// `POST /api/departures` — location signature to normalized departures.
async fn station_departures(
    State(state): State<AppState>,
    Json(req): Json<StationDeparturesRequest>,
) -> Result<Json<Vec<Departure>>, AppError> {
    let signature = req
        .station_signature
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "stationSignature is required".to_string(),
        })?;

    let station = StationRef::Signature {
        code: signature.to_string(),
        name: None,
    };
    let departures = state.trafikverket.fetch_departures(&station).await?;

    Ok(Json(departures))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(message) => AppError::NotFound { message },
            ProviderError::Upstream(message) | ProviderError::Parse(message) => {
                AppError::Upstream { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Short message only; upstream credentials and bodies never land here.
        tracing::warn!(%status, %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
