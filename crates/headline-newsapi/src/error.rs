use thiserror::Error;

/// Errors returned by the NewsAPI client.
#[derive(Debug, Error)]
pub enum NewsApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response envelope carried `"status": "error"`.
    #[error("NewsAPI error ({code}): {message}")]
    ApiError { code: String, message: String },

    /// Non-2xx HTTP status without a NewsAPI error envelope.
    #[error("NewsAPI returned HTTP {0}")]
    Status(u16),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL or an endpoint path could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
