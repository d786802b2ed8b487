//! Configuration for the Sleeper client

use crate::{FetchError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sleeper API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleeperConfig {
    pub api_base_url: String,

    /// Pause after every request, in milliseconds
    pub request_delay_ms: u64,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SleeperConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.sleeper.app/v1".to_string(),
            request_delay_ms: 500,
            timeout_secs: 30,
        }
    }
}

impl SleeperConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overlay any `SLEEPER_*` environment variables onto this config
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Overlay `SLEEPER_*` values returned by `lookup`
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SLEEPER_API_BASE_URL") {
            self.api_base_url = url;
        }

        if let Some(delay) = lookup("SLEEPER_REQUEST_DELAY_MS") {
            self.request_delay_ms = delay.trim().parse::<u64>().map_err(|_| {
                FetchError::InvalidConfig { message: "Invalid SLEEPER_REQUEST_DELAY_MS".to_string() }
            })?;
        }

        if let Some(timeout) = lookup("SLEEPER_TIMEOUT_SECS") {
            self.timeout_secs = timeout.trim().parse::<u64>().map_err(|_| {
                FetchError::InvalidConfig { message: "Invalid SLEEPER_TIMEOUT_SECS".to_string() }
            })?;
        }

        Ok(())
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL for an API path such as `league/123/rosters`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SleeperConfig::default();
        assert_eq!(config.request_delay(), Duration::from_millis(500));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_url_joining() {
        let config = SleeperConfig {
            api_base_url: "https://api.sleeper.app/v1/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.url("/league/42"), "https://api.sleeper.app/v1/league/42");
        assert_eq!(config.url("league/42/rosters"), "https://api.sleeper.app/v1/league/42/rosters");
    }

    #[test]
    fn test_env_overlay() {
        let mut config = SleeperConfig { timeout_secs: 5, ..Default::default() };

        config
            .apply_vars(|name| match name {
                "SLEEPER_API_BASE_URL" => Some("http://localhost:8080/v1".to_string()),
                "SLEEPER_REQUEST_DELAY_MS" => Some("0".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080/v1");
        assert_eq!(config.request_delay_ms, 0);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = SleeperConfig::default();

        let err = config
            .apply_vars(|name| (name == "SLEEPER_TIMEOUT_SECS").then(|| "soon".to_string()))
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidConfig { ref message }
            if message == "Invalid SLEEPER_TIMEOUT_SECS"));
    }
}
