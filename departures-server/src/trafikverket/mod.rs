//! Trafikverket open API client.
//!
//! The XML-based transit-authority provider. Requests are XML documents
//! POSTed to a single endpoint, with the authentication token embedded in
//! the request body rather than a header. Key characteristics:
//! - Station lookup is a geo-radius query for `TrainStation` objects
//!   (radius fixed at 5000 m)
//! - Departures are `TrainAnnouncement` objects filtered to
//!   `ActivityType == Avgang` for one location signature
//! - The response wraps results in `RESPONSE/RESULT`; a result node with
//!   one child and one with many must both parse to a sequence

mod client;
mod convert;
mod error;
mod query;
mod types;

pub use client::{TrafikverketClient, TrafikverketConfig};
pub use convert::normalize_announcements;
pub use error::TrafikverketError;
pub use query::STATION_RADIUS_METERS;
pub use types::{TrafikverketResponse, TrainAnnouncement, TrainStation};
