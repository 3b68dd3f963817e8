//! ResRobot (Samtrafiken) JSON API client.
//!
//! This is the coordinate-only provider: one upstream serves both the
//! nearest-stop lookup and the departure board as plain JSON calls.
//! Key characteristics:
//! - Authentication is a per-request `accessId` query parameter
//! - `location.nearbystops` is queried with `maxNo=1`, so the nearest
//!   stop is always `stopLocationOrCoordLocation[0]`
//! - The board returns at most 10 upcoming journeys per request

mod client;
mod convert;
mod error;
mod types;

pub use client::{ResRobotClient, ResRobotConfig};
pub use convert::normalize_board;
pub use error::ResRobotError;
pub use types::{DepartureBoardResponse, DepartureRecord, NearbyStopsResponse, StopLocation};
