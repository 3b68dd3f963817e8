//! Station reference types.

use std::fmt;

/// An opaque reference to a resolved station.
///
/// The two upstream ecosystems identify stations differently: the JSON
/// provider by a numeric external id plus a display name, the XML provider
/// by a short location signature such as `"Cst"`. Callers never inspect the
/// contents; a `StationRef` is only meaningful as input to the departure
/// fetch that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationRef {
    /// A stop from the JSON nearby-stops provider.
    Stop { ext_id: String, name: String },

    /// A location signature from the XML transit-authority provider,
    /// with the advertised station name when the lookup returned one.
    Signature { code: String, name: Option<String> },
}

impl StationRef {
    /// Human-readable name for the station, used in board responses.
    ///
    /// Falls back to the signature code when no advertised name is known.
    pub fn display_name(&self) -> &str {
        match self {
            StationRef::Stop { name, .. } => name,
            StationRef::Signature { code, name } => name.as_deref().unwrap_or(code),
        }
    }

    /// The identifier passed to the provider's departure fetch.
    pub fn id(&self) -> &str {
        match self {
            StationRef::Stop { ext_id, .. } => ext_id,
            StationRef::Signature { code, .. } => code,
        }
    }
}

impl fmt::Display for StationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_display_name_and_id_differ() {
        let station = StationRef::Stop {
            ext_id: "740000001".to_string(),
            name: "Stockholm Centralstation".to_string(),
        };
        assert_eq!(station.display_name(), "Stockholm Centralstation");
        assert_eq!(station.id(), "740000001");
    }

    #[test]
    fn bare_signature_is_both_name_and_id() {
        let station = StationRef::Signature {
            code: "Cst".to_string(),
            name: None,
        };
        assert_eq!(station.display_name(), "Cst");
        assert_eq!(station.id(), "Cst");
        assert_eq!(station.to_string(), "Cst");
    }

    #[test]
    fn signature_prefers_advertised_name_for_display() {
        let station = StationRef::Signature {
            code: "Cst".to_string(),
            name: Some("Stockholm Central".to_string()),
        };
        assert_eq!(station.display_name(), "Stockholm Central");
        assert_eq!(station.id(), "Cst");
    }
}
