//! Trafikverket client error types.

/// Errors that can occur when calling the Trafikverket API.
///
/// `Xml` is deliberately separate from `NoStation`/`NoAnnouncements`: a
/// malformed body is an upstream fault (HTTP 500 at the web boundary),
/// while an empty result is a legitimate "nothing there" answer (404).
#[derive(Debug, thiserror::Error)]
pub enum TrafikverketError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP transport error calling Trafikverket")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("Trafikverket API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not parseable XML
    #[error("Trafikverket XML parse error: {message}")]
    Xml { message: String },

    /// No station within the search radius
    #[error("no station within {radius} m of the given coordinate", radius = super::STATION_RADIUS_METERS)]
    NoStation,

    /// No departure announcements for the signature
    #[error("no departures found for the given station")]
    NoAnnouncements,

    /// No authentication token was configured at startup
    #[error("Trafikverket API key not configured (set TRAFIKVERKET_API_KEY)")]
    NotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TrafikverketError::NoStation;
        assert_eq!(
            err.to_string(),
            "no station within 5000 m of the given coordinate"
        );

        let err = TrafikverketError::Api {
            status: 401,
            message: "invalid login".into(),
        };
        assert_eq!(err.to_string(), "Trafikverket API error 401: invalid login");
    }

    #[test]
    fn xml_error_is_distinguishable_from_not_found() {
        let parse = TrafikverketError::Xml {
            message: "unexpected end of input".into(),
        };
        let missing = TrafikverketError::NoAnnouncements;

        assert!(parse.to_string().contains("XML parse error"));
        assert!(!missing.to_string().contains("parse"));
    }
}
