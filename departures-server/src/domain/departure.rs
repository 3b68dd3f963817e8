//! The normalized, client-facing departure shape.

use serde::Serialize;

/// Placeholder substituted for any field an upstream provider omits.
///
/// The client contract guarantees every `Departure` field is present, so
/// the normalizers never pass through a missing value.
pub const UNKNOWN: &str = "Unknown";

/// Substitute [`UNKNOWN`] for an absent or empty upstream field.
pub fn or_unknown(value: Option<String>) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => UNKNOWN.to_string(),
    }
}

/// A single upcoming departure, normalized across providers.
///
/// This is the stable shape every provider's raw announcements are mapped
/// onto. All fields are always present; absent upstream values become
/// [`UNKNOWN`]. Output order follows the upstream board order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Departure {
    /// Scheduled time as reported by the provider (format varies).
    pub time: String,

    /// Destination or direction of travel.
    pub destination: String,

    /// Product category, e.g. "BLT" (local bus) or "JLT" (local train).
    #[serde(rename = "type")]
    pub transport_type: String,

    /// Route or line identifier, e.g. "Länstrafik - Buss 3".
    pub route: String,
}
