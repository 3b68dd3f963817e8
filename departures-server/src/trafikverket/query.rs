//! XML request payload builders.
//!
//! Trafikverket queries are small XML documents. The filter syntax is not
//! validated upstream: a malformed value string silently matches nothing,
//! so the coordinate is validated present at the web boundary before it is
//! ever formatted into a filter.

use crate::domain::Coordinate;

/// Geo search radius for station resolution, in meters.
pub const STATION_RADIUS_METERS: u32 = 5000;

/// Schema version for `TrainStation` queries.
const STATION_SCHEMA: &str = "1.4";

/// Schema version for `TrainAnnouncement` queries.
const ANNOUNCEMENT_SCHEMA: &str = "1.8";

/// Build the geo-radius query for stations near a coordinate.
///
/// The `WITHIN` filter value is `"<lat> <lng>,<radius>"`.
pub fn station_query(api_key: &str, coords: Coordinate) -> String {
    format!(
        r#"<REQUEST>
  <LOGIN authenticationkey="{key}" />
  <QUERY objecttype="TrainStation" schemaversion="{schema}">
    <FILTER>
      <WITHIN name="Geometry.WGS84" shape="center" value="{lat} {lng},{radius}" />
    </FILTER>
    <INCLUDE>LocationSignature</INCLUDE>
    <INCLUDE>AdvertisedLocationName</INCLUDE>
  </QUERY>
</REQUEST>"#,
        key = escape_attr(api_key),
        schema = STATION_SCHEMA,
        lat = coords.latitude,
        lng = coords.longitude,
        radius = STATION_RADIUS_METERS,
    )
}

/// Build the departure-announcements query for one location signature.
///
/// Filters to `LocationSignature == signature AND ActivityType == Avgang`
/// and requests only the fields the normalizer needs.
pub fn announcements_query(api_key: &str, signature: &str) -> String {
    format!(
        r#"<REQUEST>
  <LOGIN authenticationkey="{key}" />
  <QUERY objecttype="TrainAnnouncement" schemaversion="{schema}">
    <FILTER>
      <AND>
        <EQ name="LocationSignature" value="{signature}" />
        <EQ name="ActivityType" value="Avgang" />
      </AND>
    </FILTER>
    <INCLUDE>AdvertisedTimeAtLocation</INCLUDE>
    <INCLUDE>AdvertisedTrainIdent</INCLUDE>
    <INCLUDE>ToLocation</INCLUDE>
    <INCLUDE>ProductInformation</INCLUDE>
  </QUERY>
</REQUEST>"#,
        key = escape_attr(api_key),
        schema = ANNOUNCEMENT_SCHEMA,
        signature = escape_attr(signature),
    )
}

/// Escape a string for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
