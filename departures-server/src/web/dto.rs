//! Data transfer objects for web requests and responses.
//!
//! Required fields are declared `Option` and checked by the handlers so
//! that a missing field yields our 400 response (with no upstream call)
//! rather than a deserializer rejection.

use serde::{Deserialize, Serialize};

use crate::domain::Departure;

/// Query for `GET /api/departures`.
#[derive(Debug, Deserialize)]
pub struct DeparturesQuery {
    /// Latitude in decimal degrees
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    pub lng: Option<f64>,
}

/// Response for `GET /api/departures`.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Name of the resolved nearest station
    pub station: String,

    /// Upcoming departures in board order
    pub departures: Vec<Departure>,
}

/// Body for `POST /api/geocode`.
#[derive(Debug, Deserialize)]
pub struct GeocodeRequest {
    /// Free-text address to resolve
    pub address: Option<String>,
}

/// Response for `POST /api/geocode`.
#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub lat: f64,
    pub lng: f64,
}

/// Body for `POST /api/station`.
#[derive(Debug, Deserialize)]
pub struct StationRequest {
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
}

/// Response for `POST /api/station`.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    /// Location signature of the nearest station
    pub signature: String,
}

/// Body for `POST /api/departures`.
#[derive(Debug, Deserialize)]
pub struct StationDeparturesRequest {
    /// Location signature from a prior station resolution
    #[serde(rename = "stationSignature")]
    pub station_signature: Option<String>,
}

/// Error body returned for all failure statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
