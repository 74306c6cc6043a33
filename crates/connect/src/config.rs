//! Connection settings for the Eventboard backend.
//!
//! Passed explicitly at construction time; the env constructor exists so
//! deployments configure the client without hardcoded connection literals.

use std::time::Duration;

use crate::errors::{ConnectError, Result};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_API_URL: &str = "EVENTBOARD_API_URL";
const ENV_API_TOKEN: &str = "EVENTBOARD_API_TOKEN";
const ENV_API_TIMEOUT_SECS: &str = "EVENTBOARD_API_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ConnectConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
    /// Bearer token for authenticated endpoints.
    pub access_token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ConnectConfig {
    pub fn new(base_url: &str, access_token: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Builds the configuration from `EVENTBOARD_API_URL`,
    /// `EVENTBOARD_API_TOKEN` and optional `EVENTBOARD_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let base_url = read_env(ENV_API_URL)?;
        let access_token = read_env(ENV_API_TOKEN)?;

        let timeout = match std::env::var(ENV_API_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    ConnectError::InvalidConfigValue(format!(
                        "{}: expected seconds, got '{}'",
                        ENV_API_TIMEOUT_SECS, raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            timeout,
        })
    }
}

fn read_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConnectError::MissingConfigKey(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_base_url() {
        let config = ConnectConfig::new("https://api.eventboard.app/ ", "token");
        assert_eq!(config.base_url, "https://api.eventboard.app");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_from_env_reports_missing_keys() {
        // Only touch the env in this single test to avoid races with
        // parallel test execution.
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_API_TOKEN);
        match ConnectConfig::from_env() {
            Err(ConnectError::MissingConfigKey(key)) => assert_eq!(key, ENV_API_URL),
            other => panic!("Expected MissingConfigKey, got {:?}", other),
        }

        std::env::set_var(ENV_API_URL, "https://api.eventboard.app/");
        std::env::set_var(ENV_API_TOKEN, "secret");
        let config = ConnectConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://api.eventboard.app");
        assert_eq!(config.access_token, "secret");

        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_API_TOKEN);
    }
}
