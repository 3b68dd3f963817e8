//! ResRobot client error types.

/// Errors that can occur when calling the ResRobot API.
///
/// The `Http` variant's display deliberately omits the underlying reqwest
/// error text: reqwest includes the request URL, and ResRobot carries the
/// API key as a query parameter.
#[derive(Debug, thiserror::Error)]
pub enum ResRobotError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP transport error calling ResRobot")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("ResRobot API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("ResRobot JSON parse error: {message}")]
    Json { message: String },

    /// Provider returned an empty stop list for the coordinate
    #[error("no stops near the given coordinate")]
    NoStops,

    /// No API key was configured at startup
    #[error("ResRobot API key not configured (set RESROBOT_API_KEY)")]
    NotConfigured,
}
