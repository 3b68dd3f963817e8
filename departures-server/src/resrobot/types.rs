//! ResRobot API response DTOs.
//!
//! These types map directly to the ResRobot v2.1 JSON responses. They use
//! `Option` liberally because the API omits fields rather than sending
//! null values.

use serde::Deserialize;

/// Response from `location.nearbystops`.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyStopsResponse {
    /// Matches, nearest first. Each entry wraps either a stop or a plain
    /// coordinate location; only stops carry an external id.
    #[serde(rename = "stopLocationOrCoordLocation", default)]
    pub stop_locations: Vec<StopLocationEntry>,
}

/// One entry in the nearby-stops list.
#[derive(Debug, Clone, Deserialize)]
pub struct StopLocationEntry {
    #[serde(rename = "StopLocation")]
    pub stop_location: Option<StopLocation>,
}

/// A transit stop with its provider-assigned external id.
#[derive(Debug, Clone, Deserialize)]
pub struct StopLocation {
    /// External id used as input to `departureBoard`.
    #[serde(rename = "extId")]
    pub ext_id: String,

    /// Human-readable stop name.
    pub name: String,
}

/// Response from `departureBoard`.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureBoardResponse {
    /// Upcoming departures in board order. Absent when the stop has none.
    #[serde(rename = "Departure", default)]
    pub departures: Vec<DepartureRecord>,
}

/// One raw departure from the board.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartureRecord {
    /// Scheduled time, "HH:MM:SS".
    pub time: Option<String>,

    /// Direction of travel (terminus name).
    pub direction: Option<String>,

    /// Route name, e.g. "Länstrafik - Buss 3".
    pub name: Option<String>,

    /// Product details for the vehicle serving this stop.
    #[serde(rename = "ProductAtStop")]
    pub product_at_stop: Option<ProductAtStop>,
}

/// Product category block within a departure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductAtStop {
    /// Short product category code, e.g. "BLT" or "JLT".
    #[serde(rename = "catOut")]
    pub cat_out: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nearby_stops() {
        let json = r#"{
            "stopLocationOrCoordLocation": [
                {
                    "StopLocation": {
                        "extId": "740000001",
                        "name": "Stockholm Centralstation",
                        "lat": 59.331537,
                        "lon": 18.054943
                    }
                }
            ]
        }"#;

        let response: NearbyStopsResponse = serde_json::from_str(json).unwrap();
        let stop = response.stop_locations[0].stop_location.as_ref().unwrap();
        assert_eq!(stop.ext_id, "740000001");
        assert_eq!(stop.name, "Stockholm Centralstation");
    }

    #[test]
    fn parse_empty_stop_list() {
        let response: NearbyStopsResponse =
            serde_json::from_str(r#"{"stopLocationOrCoordLocation": []}"#).unwrap();
        assert!(response.stop_locations.is_empty());
    }

    #[test]
    fn parse_missing_stop_list() {
        // The key itself can be absent when nothing matches.
        let response: NearbyStopsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.stop_locations.is_empty());
    }

    #[test]
    fn parse_departure_board() {
        let json = r#"{
            "Departure": [
                {
                    "name": "Länstrafik - Buss 3",
                    "time": "14:22:00",
                    "direction": "Södersjukhuset",
                    "ProductAtStop": {"catOut": "BLT"}
                },
                {
                    "name": "Pendeltåg 43",
                    "time": "14:25:00",
                    "direction": "Bålsta"
                }
            ]
        }"#;

        let board: DepartureBoardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(board.departures.len(), 2);
        assert_eq!(board.departures[0].time.as_deref(), Some("14:22:00"));
        assert!(board.departures[1].product_at_stop.is_none());
    }

    #[test]
    fn parse_board_without_departures() {
        let board: DepartureBoardResponse = serde_json::from_str("{}").unwrap();
        assert!(board.departures.is_empty());
    }
}
