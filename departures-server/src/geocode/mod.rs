//! Forward-geocoding client.
//!
//! Turns a free-text address into a coordinate via a JSON geocoding
//! provider, taking the first match. One outbound call per invocation,
//! no retry.

mod client;
mod error;

pub use client::{GeocodeClient, GeocodeConfig};
pub use error::GeocodeError;
