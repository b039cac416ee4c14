//! Live-train API error types.

/// Errors from the live-train HTTP client.
///
/// These never escape the resolver: every variant is logged and collapsed
/// to "entity unavailable" before reaching a caller. They exist so the logs
/// can tell a timeout from a bad credential from a malformed response.
#[derive(Debug, thiserror::Error)]
pub enum LiveApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or rejected API key
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by live-train API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the documented shape
    #[error("JSON parse error: {message} (body: {body})")]
    Json { message: String, body: String },
}
