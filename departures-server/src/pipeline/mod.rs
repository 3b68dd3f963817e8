//! The departure-aggregation pipeline.
//!
//! Two upstream ecosystems answer the same question with different shapes.
//! Rather than duplicating the pipeline per provider, both are plugged in
//! behind [`DepartureProvider`]: resolve the nearest station, then fetch
//! its board. Stages run strictly sequentially; each stage consumes only
//! the prior stage's output, and the run is all-or-nothing.
//!
//! This module is also the single classification boundary for provider
//! failures: every client error converts into a [`ProviderError`] here, so
//! the web layer maps one taxonomy onto HTTP statuses.

use std::future::Future;

use crate::domain::{Coordinate, Departure, StationRef};
use crate::geocode::GeocodeError;
use crate::resrobot::ResRobotError;
use crate::trafikverket::TrafikverketError;

/// A classified pipeline failure.
///
/// `Parse` is kept separate from `Upstream` so a malformed XML body is
/// distinguishable in logs and tests from a plain upstream fault, even
/// though both map to HTTP 500.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider legitimately has no matching data (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Network failure, non-success status, or missing credentials (HTTP 500).
    #[error("{0}")]
    Upstream(String),

    /// The provider sent an unparseable response body (HTTP 500).
    #[error("{0}")]
    Parse(String),
}

impl From<ResRobotError> for ProviderError {
    fn from(err: ResRobotError) -> Self {
        match err {
            ResRobotError::NoStops => ProviderError::NotFound(err.to_string()),
            ResRobotError::Json { .. } => ProviderError::Parse(err.to_string()),
            ResRobotError::Http(_) | ResRobotError::Api { .. } | ResRobotError::NotConfigured => {
                ProviderError::Upstream(err.to_string())
            }
        }
    }
}

impl From<TrafikverketError> for ProviderError {
    fn from(err: TrafikverketError) -> Self {
        match err {
            TrafikverketError::NoStation | TrafikverketError::NoAnnouncements => {
                ProviderError::NotFound(err.to_string())
            }
            TrafikverketError::Xml { .. } => ProviderError::Parse(err.to_string()),
            TrafikverketError::Http(_)
            | TrafikverketError::Api { .. }
            | TrafikverketError::NotConfigured => ProviderError::Upstream(err.to_string()),
        }
    }
}

impl From<GeocodeError> for ProviderError {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::NoMatch => ProviderError::NotFound(err.to_string()),
            GeocodeError::Json { .. } => ProviderError::Parse(err.to_string()),
            GeocodeError::Http(_) | GeocodeError::Api { .. } | GeocodeError::NotConfigured => {
                ProviderError::Upstream(err.to_string())
            }
        }
    }
}

/// Capability set shared by both upstream ecosystems.
///
/// Implementations return already-normalized departures: the raw provider
/// records never cross this boundary.
pub trait DepartureProvider: Send + Sync {
    /// Resolve the station nearest to a coordinate.
    fn resolve_station(
        &self,
        coords: Coordinate,
    ) -> impl Future<Output = Result<StationRef, ProviderError>> + Send;

    /// Fetch the departure board for a previously resolved station.
    fn fetch_departures(
        &self,
        station: &StationRef,
    ) -> impl Future<Output = Result<Vec<Departure>, ProviderError>> + Send;
}

/// A resolved station together with its normalized departure board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Display name of the resolved station.
    pub station: String,

    /// Departures in upstream board order.
    pub departures: Vec<Departure>,
}

/// Run the full coordinate-to-board pipeline against one provider.
pub async fn fetch_board<P: DepartureProvider>(
    provider: &P,
    coords: Coordinate,
) -> Result<Board, ProviderError> {
    let station = provider.resolve_station(coords).await?;
    let departures = provider.fetch_departures(&station).await?;

    Ok(Board {
        station: station.display_name().to_string(),
        departures,
    })
}
