// src/config.rs
use std::time::Duration;

/// Ceiling applied when FLOW_TIMEOUT_SECS is 0 ("no timeout"). A slow
/// browser-automation flow may run long, but a request must not pin
/// resources forever.
pub const FLOW_TIMEOUT_CEILING: Duration = Duration::from_secs(900);

/// Bound on the /health upstream probe, independent of the flow timeout.
pub const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_FLOW_TIMEOUT: Duration = Duration::from_secs(60);

/// Process-wide configuration, read once at startup and passed into the
/// router state explicitly.
#[derive(Clone, Debug)]
pub struct Config {
    pub upstream_base_url: String,
    /// Fallback credential when the request carries none.
    pub default_api_key: Option<String>,
    /// Fallback flow when the request carries none.
    pub default_flow_id: Option<String>,
    pub flow_timeout: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let upstream_base_url = std::env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| "http://langflow:7860".to_string());

        let default_api_key = std::env::var("UPSTREAM_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());
        let default_flow_id = std::env::var("DEFAULT_FLOW_ID")
            .ok()
            .filter(|s| !s.is_empty());

        let flow_timeout = std::env::var("FLOW_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(clamp_flow_timeout)
            .unwrap_or(DEFAULT_FLOW_TIMEOUT);

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        Self {
            upstream_base_url,
            default_api_key,
            default_flow_id,
            flow_timeout,
            port,
        }
    }
}

// 0 means "let the flow run as long as it needs", which still gets the
// ceiling rather than a truly unbounded wait.
fn clamp_flow_timeout(secs: u64) -> Duration {
    if secs == 0 {
        FLOW_TIMEOUT_CEILING
    } else {
        Duration::from_secs(secs.min(FLOW_TIMEOUT_CEILING.as_secs()))
    }
}
