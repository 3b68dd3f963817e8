//! Domain types for the departure aggregation pipeline.
//!
//! These are the request-scoped types that flow between pipeline stages.
//! Raw provider records never cross a stage boundary; they are converted
//! into these types at the edge of each provider module.

mod coordinate;
mod departure;
mod station;

pub use coordinate::Coordinate;
pub use departure::{Departure, UNKNOWN, or_unknown};
pub use station::StationRef;
