//! Geocoding HTTP client.

use serde::Deserialize;

use crate::domain::Coordinate;

use super::error::GeocodeError;

/// Default base URL for the geocoding API (OpenCage).
const DEFAULT_BASE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Wrapper for the geocoding response.
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

/// One match; we only need its geometry.
#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// API key sent as the `key` query parameter. `None` means the key
    /// was absent at startup; calls fail with `NotConfigured`.
    pub api_key: Option<String>,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
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

/// Client for the forward-geocoding API.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeocodeClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Resolve an address to the first matching coordinate.
    ///
    /// The address is assumed non-empty; the web boundary rejects blank
    /// input before this is called. Zero matches is `NoMatch`.
    pub async fn resolve(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(GeocodeError::NotConfigured)?;

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", address), ("key", key), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        let first = parsed.results.into_iter().next().ok_or(GeocodeError::NoMatch)?;
        Ok(Coordinate::new(first.geometry.lat, first.geometry.lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GeocodeConfig::new(Some("test-key".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = GeocodeConfig::new(Some("test-key".to_string()))
            .with_base_url("http://localhost:1")
            .with_timeout(60);

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.base_url, "http://localhost:1");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn parse_response_geometry() {
        let json = r#"{
            "results": [
                {
                    "formatted": "Centralplan 15, 111 20 Stockholm, Sweden",
                    "geometry": {"lat": 59.3307, "lng": 18.0576}
                }
            ],
            "status": {"code": 200, "message": "OK"}
        }"#;

        let parsed: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results[0].geometry.lat, 59.3307);
        assert_eq!(parsed.results[0].geometry.lng, 18.0576);
    }

    #[test]
    fn parse_zero_results() {
        let parsed: GeocodeResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(parsed.results.is_empty());
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_network_call() {
        let client = GeocodeClient::new(
            GeocodeConfig::new(None).with_base_url("http://192.0.2.1:1"),
        )
        .unwrap();

        let err = client.resolve("Central Station, Stockholm").await.unwrap_err();
        assert!(matches!(err, GeocodeError::NotConfigured));
    }

    #[tokio::test]
    async fn resolves_first_match() {
        let addr = crate::testutil::spawn(|path, _body| {
            assert!(path.contains("limit=1"));
            (
                200,
                r#"{"results": [
                    {"geometry": {"lat": 59.3307, "lng": 18.0576}},
                    {"geometry": {"lat": 0.0, "lng": 0.0}}
                ]}"#
                .to_string(),
            )
        })
        .await;

        let client = GeocodeClient::new(
            GeocodeConfig::new(Some("k".to_string())).with_base_url(format!("http://{addr}/")),
        )
        .unwrap();

        let coords = client.resolve("Central Station, Stockholm").await.unwrap();
        assert_eq!(coords, Coordinate::new(59.3307, 18.0576));
    }

    #[tokio::test]
    async fn zero_matches_is_no_match() {
        let addr = crate::testutil::spawn(|_path, _body| (200, r#"{"results": []}"#.to_string()))
            .await;

        let client = GeocodeClient::new(
            GeocodeConfig::new(Some("k".to_string())).with_base_url(format!("http://{addr}/")),
        )
        .unwrap();

        let err = client.resolve("Nowhere At All").await.unwrap_err();
        assert!(matches!(err, GeocodeError::NoMatch));
    }
}
