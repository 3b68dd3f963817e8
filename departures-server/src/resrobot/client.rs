//! ResRobot HTTP client.
//!
//! Provides async methods for the nearby-stops lookup and the departure
//! board, plus the [`DepartureProvider`] implementation that chains them.

use std::future::Future;

use crate::domain::{Coordinate, Departure, StationRef};
use crate::pipeline::{DepartureProvider, ProviderError};

use super::convert::normalize_board;
use super::error::ResRobotError;
use super::types::{DepartureBoardResponse, NearbyStopsResponse, StopLocation};

/// Default base URL for the ResRobot v2.1 API.
const DEFAULT_BASE_URL: &str = "https://api.resrobot.se/v2.1";

/// Result cap for the nearby-stops lookup: we only ever want the nearest.
const NEARBY_MAX_RESULTS: u8 = 1;

/// Maximum upcoming journeys fetched per board request.
const BOARD_MAX_JOURNEYS: u8 = 10;

/// Configuration for the ResRobot client.
#[derive(Debug, Clone)]
pub struct ResRobotConfig {
    /// API key sent as the `accessId` query parameter. `None` means the
    /// key was absent at startup; calls fail with `NotConfigured`.
    pub api_key: Option<String>,
    /// Base URL for the API (defaults to production ResRobot)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ResRobotConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ResRobot API client.
#[derive(Debug, Clone)]
pub struct ResRobotClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ResRobotClient {
    /// Create a new ResRobot client with the given configuration.
    pub fn new(config: ResRobotConfig) -> Result<Self, ResRobotError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// The configured key, or `NotConfigured` before any network I/O.
    fn api_key(&self) -> Result<&str, ResRobotError> {
        self.api_key.as_deref().ok_or(ResRobotError::NotConfigured)
    }

    /// Find the stop nearest to a coordinate.
    ///
    /// Queries `location.nearbystops` capped at one result. An empty match
    /// list is a legitimate provider answer and maps to `NoStops`, never to
    /// an index panic.
    pub async fn nearest_stop(&self, coords: Coordinate) -> Result<StopLocation, ResRobotError> {
        let key = self.api_key()?;
        let url = format!("{}/location.nearbystops", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("originCoordLat", coords.latitude.to_string()),
                ("originCoordLong", coords.longitude.to_string()),
                ("maxNo", NEARBY_MAX_RESULTS.to_string()),
                ("accessId", key.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResRobotError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        let parsed: NearbyStopsResponse =
            serde_json::from_str(&body).map_err(|e| ResRobotError::Json {
                message: e.to_string(),
            })?;

        parsed
            .stop_locations
            .into_iter()
            .find_map(|entry| entry.stop_location)
            .ok_or(ResRobotError::NoStops)
    }

    /// Fetch up to [`BOARD_MAX_JOURNEYS`] departures for a stop.
    ///
    /// An empty board is a successful answer (a stop with nothing due),
    /// so this returns an empty list rather than an error.
    pub async fn departure_board(
        &self,
        ext_id: &str,
    ) -> Result<DepartureBoardResponse, ResRobotError> {
        let key = self.api_key()?;
        let url = format!("{}/departureBoard", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("id", ext_id.to_string()),
                ("maxJourneys", BOARD_MAX_JOURNEYS.to_string()),
                ("accessId", key.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResRobotError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ResRobotError::Json {
            message: e.to_string(),
        })
    }
}

impl DepartureProvider for ResRobotClient {
    fn resolve_station(
        &self,
        coords: Coordinate,
    ) -> impl Future<Output = Result<StationRef, ProviderError>> + Send {
        async move {
            let stop = self.nearest_stop(coords).await?;
            Ok(StationRef::Stop {
                ext_id: stop.ext_id,
                name: stop.name,
            })
        }
    }

    fn fetch_departures(
        &self,
        station: &StationRef,
    ) -> impl Future<Output = Result<Vec<Departure>, ProviderError>> + Send {
        async move {
            let board = self.departure_board(station.id()).await?;
            Ok(normalize_board(board.departures))
        }
    }
}
