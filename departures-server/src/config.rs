//! Process configuration.
//!
//! Credentials are read from the environment once at startup and passed
//! into the client constructors explicitly; nothing reads the environment
//! at request time. A missing key does not prevent the server from
//! starting: the affected client fails with a "not configured" error at
//! call time instead.

use std::net::SocketAddr;

/// Environment variable for the ResRobot API key.
pub const RESROBOT_API_KEY: &str = "RESROBOT_API_KEY";

/// Environment variable for the Trafikverket authentication token.
pub const TRAFIKVERKET_API_KEY: &str = "TRAFIKVERKET_API_KEY";

/// Environment variable for the geocoding API key.
pub const GEOCODING_API_KEY: &str = "GEOCODING_API_KEY";

/// Environment variable for the bind address.
pub const BIND_ADDR: &str = "BIND_ADDR";

/// Default bind address.
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
    8000,
);

/// Startup configuration for all upstream providers.
#[derive(Debug, Clone)]
pub struct Config {
    /// ResRobot API key, if configured.
    pub resrobot_api_key: Option<String>,

    /// Trafikverket authentication token, if configured.
    pub trafikverket_api_key: Option<String>,

    /// Geocoding API key, if configured.
    pub geocoding_api_key: Option<String>,

    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Warns (but does not fail) for each missing credential. An invalid
    /// `BIND_ADDR` falls back to the default.
    pub fn from_env() -> Self {
        let resrobot_api_key = env_opt(RESROBOT_API_KEY);
        let trafikverket_api_key = env_opt(TRAFIKVERKET_API_KEY);
        let geocoding_api_key = env_opt(GEOCODING_API_KEY);

        for (name, value) in [
            (RESROBOT_API_KEY, &resrobot_api_key),
            (TRAFIKVERKET_API_KEY, &trafikverket_api_key),
            (GEOCODING_API_KEY, &geocoding_api_key),
        ] {
            if value.is_none() {
                tracing::warn!("{name} not set; calls depending on it will fail");
            }
        }

        let bind_addr = env_opt(BIND_ADDR)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_BIND_ADDR);

        Self {
            resrobot_api_key,
            trafikverket_api_key,
            geocoding_api_key,
            bind_addr,
        }
    }
}

/// Read an environment variable, treating empty values as absent.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
