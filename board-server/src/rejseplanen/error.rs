//! Rejseplanen client error types.

/// Errors from the Rejseplanen HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RejseplanenError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Start of the offending body, for logs.
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Bearer token rejected
    #[error("unauthorized: check REJSEPLANEN_API_KEY")]
    Unauthorized,

    /// API key contains characters not allowed in a header
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// Query rejected before sending
    #[error("invalid trip query: {0}")]
    InvalidQuery(&'static str),
}
