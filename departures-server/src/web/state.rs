//! Application state for the web layer.

use std::sync::Arc;

use crate::geocode::GeocodeClient;
use crate::resrobot::ResRobotClient;
use crate::trafikverket::TrafikverketClient;

/// Shared application state.
///
/// Holds one client per upstream provider. All clients are stateless
/// request-makers, so the state is trivially safe to share.
#[derive(Clone)]
pub struct AppState {
    /// JSON nearby-stops / departure-board provider.
    pub resrobot: Arc<ResRobotClient>,

    /// XML transit-authority provider.
    pub trafikverket: Arc<TrafikverketClient>,

    /// Forward-geocoding provider.
    pub geocoder: Arc<GeocodeClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        resrobot: ResRobotClient,
        trafikverket: TrafikverketClient,
        geocoder: GeocodeClient,
    ) -> Self {
        Self {
            resrobot: Arc::new(resrobot),
            trafikverket: Arc::new(trafikverket),
            geocoder: Arc::new(geocoder),
        }
    }
}
