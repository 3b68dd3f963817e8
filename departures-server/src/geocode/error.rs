//! Geocoding client error types.

/// Errors that can occur when calling the geocoding API.
///
/// As with the other clients, `Http` does not display the underlying
/// reqwest error because its text includes the request URL and the URL
/// carries the API key.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP transport error calling the geocoding provider")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("geocoding API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("geocoding JSON parse error: {message}")]
    Json { message: String },

    /// No match for the address
    #[error("location not found")]
    NoMatch,

    /// No API key was configured at startup
    #[error("geocoding API key not configured (set GEOCODING_API_KEY)")]
    NotConfigured,
}
