use std::time::Duration;

use crate::transport::TransportMode;

/// Gateway configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub transport: TransportMode,
    pub tavily_url: String,
    pub downstream_timeout: Duration,
    /// Raw comma-separated credential string, `None` when unset. Required
    /// at request time, not at startup.
    pub api_keys: Option<String>,
}

impl Config {
    /// Read configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let host = std::env::var("SPYGLASS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("SPYGLASS_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let transport = match std::env::var("SPYGLASS_TRANSPORT").as_deref() {
            Ok("json") => TransportMode::Json,
            Ok("sse") | Err(_) => TransportMode::EventStream,
            Ok(other) => {
                tracing::warn!("unknown SPYGLASS_TRANSPORT '{other}', using sse");
                TransportMode::EventStream
            }
        };

        let tavily_url = std::env::var("SPYGLASS_TAVILY_URL")
            .unwrap_or_else(|_| spyglass_tavily::DEFAULT_BASE_URL.to_string());

        let downstream_timeout = Duration::from_secs(
            std::env::var("SPYGLASS_DOWNSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        );

        Self {
            host,
            port,
            transport,
            tavily_url,
            downstream_timeout,
            api_keys: std::env::var("TAVILY_API_KEY").ok(),
        }
    }
}
