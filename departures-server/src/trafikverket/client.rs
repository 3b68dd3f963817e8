//! Trafikverket HTTP client.
//!
//! All queries go to one data endpoint as XML POST bodies; the response is
//! parsed with quick-xml into the [`super::types`] DTOs.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;

use crate::domain::{Coordinate, Departure, StationRef};
use crate::pipeline::{DepartureProvider, ProviderError};

use super::convert::normalize_announcements;
use super::error::TrafikverketError;
use super::query::{announcements_query, station_query};
use super::types::{TrafikverketResponse, TrainAnnouncement, TrainStation};

/// Default endpoint for the Trafikverket open API.
const DEFAULT_BASE_URL: &str = "https://api.trafikinfo.trafikverket.se/v2/data.xml";

/// Configuration for the Trafikverket client.
#[derive(Debug, Clone)]
pub struct TrafikverketConfig {
    /// Authentication token embedded in each request body. `None` means
    /// the token was absent at startup; calls fail with `NotConfigured`.
    pub api_key: Option<String>,
    /// Endpoint URL (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TrafikverketConfig {
    /// Create a new config with the given authentication token.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom endpoint URL (for testing).
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

/// Trafikverket API client.
#[derive(Debug, Clone)]
pub struct TrafikverketClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TrafikverketClient {
    /// Create a new Trafikverket client with the given configuration.
    pub fn new(config: TrafikverketConfig) -> Result<Self, TrafikverketError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// The configured token, or `NotConfigured` before any network I/O.
    fn api_key(&self) -> Result<&str, TrafikverketError> {
        self.api_key
            .as_deref()
            .ok_or(TrafikverketError::NotConfigured)
    }

    /// POST a query document and parse the XML envelope.
    async fn execute(&self, body: String) -> Result<TrafikverketResponse, TrafikverketError> {
        let response = self
            .http
            .post(&self.base_url)
            .header(CONTENT_TYPE, "text/xml")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TrafikverketError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        quick_xml::de::from_str(&body).map_err(|e| TrafikverketError::Xml {
            message: e.to_string(),
        })
    }

    /// Resolve the station nearest to a coordinate.
    ///
    /// Runs the geo-radius `TrainStation` query and takes the first match.
    /// A well-formed response with zero stations maps to `NoStation`.
    pub async fn station_near(
        &self,
        coords: Coordinate,
    ) -> Result<TrainStation, TrafikverketError> {
        let key = self.api_key()?;
        let response = self.execute(station_query(key, coords)).await?;

        response
            .stations()
            .into_iter()
            .next()
            .ok_or(TrafikverketError::NoStation)
    }

    /// Fetch departure announcements for a location signature.
    ///
    /// Zero matching announcements is `NoAnnouncements`, not an empty
    /// success: the web layer maps the two to different statuses.
    pub async fn departure_announcements(
        &self,
        signature: &str,
    ) -> Result<Vec<TrainAnnouncement>, TrafikverketError> {
        let key = self.api_key()?;
        let response = self.execute(announcements_query(key, signature)).await?;

        let announcements = response.announcements();
        if announcements.is_empty() {
            return Err(TrafikverketError::NoAnnouncements);
        }
        Ok(announcements)
    }
}

impl DepartureProvider for TrafikverketClient {
    fn resolve_station(
        &self,
        coords: Coordinate,
    ) -> impl Future<Output = Result<StationRef, ProviderError>> + Send {
        async move {
            let station = self.station_near(coords).await?;
            let code = station
                .location_signature
                .ok_or(TrafikverketError::NoStation)?;
            Ok(StationRef::Signature {
                code,
                name: station.advertised_location_name,
            })
        }
    }

    fn fetch_departures(
        &self,
        station: &StationRef,
    ) -> impl Future<Output = Result<Vec<Departure>, ProviderError>> + Send {
        async move {
            let announcements = self.departure_announcements(station.id()).await?;
            Ok(normalize_announcements(announcements))
        }
    }
}
