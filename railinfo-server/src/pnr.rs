//! PNR-status API client.
//!
//! Thin proxy over the third-party booking-status endpoint. Unlike train
//! lookups there is no local tier: a PNR query is glue between the request
//! and the upstream service, and the route handler collapses failures to
//! "status unavailable".

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

/// Default base URL for the PNR-status API.
const DEFAULT_BASE_URL: &str = "https://indian-rail-pnr-status.p.rapidapi.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Header carrying the access credential.
const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Errors from the PNR-status client.
#[derive(Debug, thiserror::Error)]
pub enum PnrError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or rejected API key
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the documented shape
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

/// Booking status for one passenger on a PNR.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerStatus {
    /// Status at booking time (e.g. "CNF/B2/34", "WL/12").
    pub booking_status: String,

    /// Current status after charting.
    pub current_status: String,
}

/// Status summary for a PNR.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrStatus {
    /// The 10-digit PNR queried.
    pub pnr: String,

    /// Train number for the booking.
    pub train_number: String,

    /// Train name.
    pub train_name: String,

    /// Journey date, display string.
    pub journey_date: String,

    /// Boarding station code.
    pub from_station: String,

    /// Destination station code.
    pub to_station: String,

    /// Travel class label.
    #[serde(rename = "class")]
    pub travel_class: String,

    /// Whether the reservation chart has been prepared.
    #[serde(default)]
    pub chart_prepared: bool,

    /// Per-passenger statuses.
    #[serde(default)]
    pub passengers: Vec<PassengerStatus>,
}

/// Configuration for the PNR-status client.
#[derive(Debug, Clone)]
pub struct PnrConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PnrConfig {
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
}

/// Client for the third-party PNR-status API.
#[derive(Debug, Clone)]
pub struct PnrClient {
    http: reqwest::Client,
    base_url: String,
}

impl PnrClient {
    /// Create a new PNR-status client.
    pub fn new(config: PnrConfig) -> Result<Self, PnrError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| PnrError::Api {
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

    /// Fetch the status of a PNR.
    ///
    /// Returns `Ok(None)` when the upstream service does not know the PNR.
    pub async fn fetch_status(&self, pnr: &str) -> Result<Option<PnrStatus>, PnrError> {
        let url = format!("{}/api/v1/pnr/{}", self.base_url, pnr);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PnrError::Unauthorized);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PnrError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        let parsed: PnrStatus = serde_json::from_str(&body).map_err(|e| PnrError::Json {
            message: e.to_string(),
        })?;

        Ok(Some(parsed))
    }
}

/// Check whether a string is a plausible PNR: exactly 10 ASCII digits.
pub fn is_valid_pnr(s: &str) -> bool {
    s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit())
}
