//! Live-train API HTTP client.
//!
//! One bounded outbound GET per lookup, credential in a header. Status
//! triage mirrors the upstream contract: 404 means "train unknown", which
//! is an `Ok` outcome, not an error.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::domain::TrainNumber;

use super::error::LiveApiError;
use super::types::RemoteTrain;

/// Default base URL for the live-train API.
const DEFAULT_BASE_URL: &str = "https://indian-rail-live-data.p.rapidapi.com";

/// Default request timeout in seconds. Lookups block a page render, so
/// this is deliberately short.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Header carrying the access credential.
const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Configuration for the live-train client.
#[derive(Debug, Clone)]
pub struct LiveApiConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LiveApiConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the third-party live-train API.
#[derive(Debug, Clone)]
pub struct LiveApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl LiveApiClient {
    /// Create a new live-train client with the given configuration.
    pub fn new(config: LiveApiConfig) -> Result<Self, LiveApiError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| LiveApiError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch a train description by number.
    ///
    /// Returns `Ok(None)` when the upstream service does not know the
    /// train; errors are reserved for transport, auth, and shape problems.
    pub async fn fetch_train(
        &self,
        number: &TrainNumber,
    ) -> Result<Option<RemoteTrain>, LiveApiError> {
        let url = format!("{}/api/v1/trains/{}", self.base_url, number.as_str());

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(LiveApiError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LiveApiError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LiveApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        // The API answers some unknown numbers with an empty 200
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        let remote: RemoteTrain =
            serde_json::from_str(&body).map_err(|e| LiveApiError::Json {
                message: e.to_string(),
                body: body.chars().take(500).collect(),
            })?;

        Ok(Some(remote))
    }
}
