//! HTTP client for the `NewsAPI` v2 REST API.
//!
//! Wraps `reqwest` with API key handling and typed response decoding. Every
//! endpoint checks the `"status"` field of the JSON envelope and surfaces
//! `NewsAPI`-level failures as [`NewsApiError::ApiError`]. The key travels in
//! the `X-Api-Key` header so it never appears in a request URL or in the
//! text of a transport error.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::NewsApiError;
use crate::types::{NewsApiResponse, RawHeadline};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";
const DEFAULT_PAGE_SIZE: u32 = 100;
const API_KEY_HEADER: &str = "X-Api-Key";

/// One of the upstream query shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlineQuery {
    /// Broad, region-scoped top headlines.
    TopHeadlines { country: String },
    /// Top headlines narrowed to one category (e.g. `technology`).
    Category { country: String, category: String },
    /// Keyword search across all indexed articles, newest first.
    Everything { query: String },
}

impl HeadlineQuery {
    /// Short label used in logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            HeadlineQuery::TopHeadlines { .. } => "top_headlines",
            HeadlineQuery::Category { .. } => "category",
            HeadlineQuery::Everything { .. } => "everything",
        }
    }

    fn endpoint(&self) -> &'static str {
        match self {
            HeadlineQuery::TopHeadlines { .. } | HeadlineQuery::Category { .. } => "top-headlines",
            HeadlineQuery::Everything { .. } => "everything",
        }
    }

    fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            HeadlineQuery::TopHeadlines { country } => vec![("country", country.as_str())],
            HeadlineQuery::Category { country, category } => vec![
                ("country", country.as_str()),
                ("category", category.as_str()),
            ],
            HeadlineQuery::Everything { query } => vec![
                ("q", query.as_str()),
                ("sortBy", "publishedAt"),
                ("language", "en"),
            ],
        }
    }
}

/// Client for the `NewsAPI` REST API.
///
/// Use [`NewsApiClient::new`] for production or
/// [`NewsApiClient::with_base_url`] to point at a mock server in tests.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
    page_size: u32,
}

impl std::fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl NewsApiClient {
    /// Creates a new client pointed at the production `NewsAPI` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, NewsApiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NewsApiError::InvalidUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NewsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("headline-digest/0.1 (news-ingestion)")
            .build()?;

        // Exactly one trailing slash so that `Url::join` appends the endpoint
        // instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| NewsApiError::InvalidUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Overrides the `pageSize` sent with every query (`NewsAPI` caps it at 100).
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, 100);
        self
    }

    /// Runs one query shape and returns the raw article objects.
    ///
    /// # Errors
    ///
    /// - [`NewsApiError::ApiError`] if the envelope status is not `"ok"`.
    /// - [`NewsApiError::Status`] on a non-2xx response without an envelope.
    /// - [`NewsApiError::Http`] on network failure.
    /// - [`NewsApiError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn fetch(&self, query: &HeadlineQuery) -> Result<Vec<RawHeadline>, NewsApiError> {
        let url = self.build_url(query)?;
        tracing::debug!(query = query.label(), "requesting NewsAPI");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope = serde_json::from_str::<NewsApiResponse>(&body);
        if let Ok(envelope) = &envelope {
            if envelope.status != "ok" {
                return Err(NewsApiError::ApiError {
                    code: envelope
                        .code
                        .clone()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: envelope
                        .message
                        .clone()
                        .unwrap_or_else(|| "NewsAPI error".to_string()),
                });
            }
        }
        if !status.is_success() {
            return Err(NewsApiError::Status(status.as_u16()));
        }

        let envelope = envelope.map_err(|e| NewsApiError::Deserialize {
            context: query.label().to_string(),
            source: e,
        })?;
        Ok(envelope.articles)
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &HeadlineQuery) -> Result<Url, NewsApiError> {
        let mut url = self
            .base_url
            .join(query.endpoint())
            .map_err(|e| NewsApiError::InvalidUrl(e.to_string()))?;
        {
            let page_size = self.page_size.to_string();
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query.params() {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("pageSize", &page_size);
        }
        Ok(url)
    }
}
