//! Configuration for the TopoVis client
//!
//! The only external configuration is the topology server address, resolved
//! from the first CLI argument, then the `TOPOVIS_SERVER` environment
//! variable, then a localhost default. Timing constants (poll interval,
//! demo settle delay) live here so the worker and tests share one source.

use std::time::Duration;

/// Default topology server base address
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5002";

/// Environment variable overriding the server address
pub const SERVER_URL_ENV: &str = "TOPOVIS_SERVER";

/// Interval between periodic topology syncs
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Delay after each demo step before the next one starts
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1500);

/// Runtime configuration for the client
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the topology server (no trailing slash)
    pub server_url: String,
    /// Interval between periodic syncs
    pub poll_interval: Duration,
    /// Inter-step settle delay for the demo orchestrator
    pub settle_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl AppConfig {
    /// Resolve the configuration from CLI arguments and the environment.
    ///
    /// Precedence: first CLI argument, then `TOPOVIS_SERVER`, then the
    /// localhost default.
    pub fn from_env() -> Self {
        let server_url = std::env::args()
            .nth(1)
            .or_else(|| std::env::var(SERVER_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        Self {
            server_url: normalize_url(&server_url),
            ..Self::default()
        }
    }

    /// Create a config pointing at the given server address
    pub fn with_server(server_url: impl Into<String>) -> Self {
        Self {
            server_url: normalize_url(&server_url.into()),
            ..Self::default()
        }
    }
}

/// Strip trailing slashes so endpoint paths can be appended directly
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
