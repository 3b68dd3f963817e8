//! Trafikverket API response DTOs.
//!
//! These deserialize from the `RESPONSE/RESULT` XML envelope via quick-xml.
//! Every repeated element is declared as a `Vec` with `#[serde(default)]`:
//! that is the single boundary where the XML singleton-vs-list ambiguity is
//! resolved, so downstream code always sees a sequence.

use serde::Deserialize;

/// The outer `RESPONSE` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrafikverketResponse {
    /// One `RESULT` node per query in the request. Absent on some error
    /// bodies, hence the default.
    #[serde(rename = "RESULT", default)]
    pub results: Vec<QueryResult>,
}

impl TrafikverketResponse {
    /// All stations across result nodes, upstream order preserved.
    pub fn stations(self) -> Vec<TrainStation> {
        self.results.into_iter().flat_map(|r| r.stations).collect()
    }

    /// All announcements across result nodes, upstream order preserved.
    pub fn announcements(self) -> Vec<TrainAnnouncement> {
        self.results
            .into_iter()
            .flat_map(|r| r.announcements)
            .collect()
    }
}

/// One `RESULT` node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "TrainStation", default)]
    pub stations: Vec<TrainStation>,

    #[serde(rename = "TrainAnnouncement", default)]
    pub announcements: Vec<TrainAnnouncement>,
}

/// A station record from a `TrainStation` query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainStation {
    /// Opaque signature identifying the station, e.g. "Cst".
    #[serde(rename = "LocationSignature")]
    pub location_signature: Option<String>,

    /// Public station name, e.g. "Stockholm Central".
    #[serde(rename = "AdvertisedLocationName")]
    pub advertised_location_name: Option<String>,
}

/// A raw departure announcement from a `TrainAnnouncement` query.
///
/// Every sub-field is individually optional upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainAnnouncement {
    /// Scheduled time as an ISO 8601 local datetime string.
    #[serde(rename = "AdvertisedTimeAtLocation")]
    pub advertised_time_at_location: Option<String>,

    /// Train identifier, e.g. "8724".
    #[serde(rename = "AdvertisedTrainIdent")]
    pub advertised_train_ident: Option<String>,

    /// Destination(s); the first entry is the advertised terminus.
    #[serde(rename = "ToLocation", default)]
    pub to_location: Vec<LocationRef>,

    /// Product descriptions, e.g. "SL Pendeltåg".
    #[serde(rename = "ProductInformation", default)]
    pub product_information: Vec<ProductInformation>,
}

/// A location entry inside `ToLocation`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationRef {
    #[serde(rename = "LocationName")]
    pub location_name: Option<String>,
}

/// A product entry inside `ProductInformation`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInformation {
    #[serde(rename = "Description")]
    pub description: Option<String>,
}
