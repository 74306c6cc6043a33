//! HTTP client for the Eventboard preference API.
//!
//! Implements the `PreferenceApi` collaborator trait from the core crate.
//! The synchronization store applies preference changes locally and
//! optimistically; this client carries the persistence side.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use eventboard_core::preferences::{
    PreferenceApi, PreferenceApiError, TagPreference, TagPreferenceResponse,
};

use crate::config::ConnectConfig;
use crate::errors::{ConnectError, Result};

#[allow(dead_code)]
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the preference endpoints of the Eventboard backend.
///
/// # Example
///
/// ```ignore
/// let config = ConnectConfig::from_env()?;
/// let client = PreferenceApiClient::new(&config)?;
/// let preferences = client.list_preferences().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PreferenceApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl PreferenceApiClient {
    /// Create a new preference API client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token cannot form a valid header or
    /// the HTTP client cannot be initialized.
    pub fn new(config: &ConnectConfig) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|e| ConnectError::InvalidConfigValue(format!("access token: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConnectError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> std::result::Result<T, PreferenceApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[PreferenceApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| PreferenceApiError::Request(e.to_string()))?;

        Self::parse_response(response).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> std::result::Result<T, PreferenceApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[PreferenceApi] PUT {}", url);

        let response = self
            .client
            .put(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| PreferenceApiError::Request(e.to_string()))?;

        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> std::result::Result<T, PreferenceApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PreferenceApiError::Request(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // Prefer the server's own message when the body carries one
            if let Ok(err) = serde_json::from_str::<ApiErrorBody>(&body) {
                if let Some(msg) = err.message.or(err.error) {
                    return Err(PreferenceApiError::Api(msg));
                }
            }
            return Err(PreferenceApiError::Api(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        serde_json::from_str(&body).map_err(|e| PreferenceApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl PreferenceApi for PreferenceApiClient {
    /// Persist a single preference (create or overwrite by tag id).
    async fn save_preference(
        &self,
        preference: &TagPreference,
    ) -> std::result::Result<TagPreferenceResponse, PreferenceApiError> {
        let response: TagPreferenceResponse =
            self.put("/api/v1/preferences", preference).await?;

        if response.success {
            debug!("[PreferenceApi] Saved preference '{}'", preference.tag_id);
        }
        Ok(response)
    }

    /// Fetch all stored preferences.
    async fn list_preferences(
        &self,
    ) -> std::result::Result<Vec<TagPreference>, PreferenceApiError> {
        let response: TagPreferenceResponse = self.get("/api/v1/preferences").await?;

        if !response.success {
            return Err(PreferenceApiError::Api(
                response
                    .error
                    .unwrap_or_else(|| "Preference listing failed".to_string()),
            ));
        }

        let preferences = response.data.unwrap_or_default();
        info!("[PreferenceApi] Fetched {} preferences", preferences.len());
        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ConnectConfig::new("https://api.eventboard.app", "test-token");
        let client = PreferenceApiClient::new(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_url_normalization() {
        let config = ConnectConfig::new("https://api.eventboard.app/", "test-token");
        let client = PreferenceApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://api.eventboard.app");
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let config = ConnectConfig::new("https://api.eventboard.app", "bad\ntoken");
        let client = PreferenceApiClient::new(&config);
        assert!(matches!(client, Err(ConnectError::InvalidConfigValue(_))));
    }
}
