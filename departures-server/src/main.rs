use departures_server::config::Config;
use departures_server::geocode::{GeocodeClient, GeocodeConfig};
use departures_server::resrobot::{ResRobotClient, ResRobotConfig};
use departures_server::trafikverket::{TrafikverketClient, TrafikverketConfig};
use departures_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Credentials come from the environment; missing ones only warn here
    // and fail at call time.
    let config = Config::from_env();

    let resrobot = ResRobotClient::new(ResRobotConfig::new(config.resrobot_api_key.clone()))
        .expect("Failed to create ResRobot client");
    let trafikverket =
        TrafikverketClient::new(TrafikverketConfig::new(config.trafikverket_api_key.clone()))
            .expect("Failed to create Trafikverket client");
    let geocoder = GeocodeClient::new(GeocodeConfig::new(config.geocoding_api_key.clone()))
        .expect("Failed to create geocoding client");

    let state = AppState::new(resrobot, trafikverket, geocoder);
    let app = create_router(state);

    let addr = config.bind_addr;
    tracing::info!("departures server listening on http://{addr}");
    tracing::info!("  GET  /health          - health check");
    tracing::info!("  GET  /api/departures  - board for the stop nearest ?lat=&lng=");
    tracing::info!("  POST /api/geocode     - address to coordinates");
    tracing::info!("  POST /api/station     - coordinates to location signature");
    tracing::info!("  POST /api/departures  - location signature to departures");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
