use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("no articles provided")]
    NoArticles,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini returned an `error` object in the response body.
    #[error("Gemini API error {code}: {message}")]
    ApiError { code: i64, message: String },

    #[error("Gemini returned HTTP {0}")]
    Status(u16),

    #[error("Gemini response contained no candidate text")]
    EmptyResponse,

    #[error("failed to deserialize Gemini response: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
