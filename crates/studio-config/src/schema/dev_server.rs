//! Development server and readiness polling settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use studio_common::Endpoint;

/// Local development server the window loads in development mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServerConfig {
    pub host: String,
    /// Overridden by the `PORT` environment variable.
    pub port: u16,
    /// Readiness probes before giving up (valid range: 1-10000).
    pub max_attempts: u32,
    /// Spacing between probes in milliseconds (valid range: 10-60000).
    pub interval_ms: u64,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 3000,
            max_attempts: 60,
            interval_ms: 500,
        }
    }
}

impl DevServerConfig {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_thirty_seconds() {
        let config = DevServerConfig::default();
        let ceiling = config.interval() * config.max_attempts;
        assert_eq!(ceiling, Duration::from_secs(30));
    }

    #[test]
    fn endpoint_uses_host_and_port() {
        let config = DevServerConfig {
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.endpoint().origin(), "http://localhost:8080");
    }
}
