//! Wire types for NewsAPI responses.
//!
//! Every article field is optional at the wire level; NewsAPI routinely sends
//! `null` descriptions and content, and occasionally `null` titles or urls.

use serde::{Deserialize, Serialize};

/// Top-level response envelope shared by `top-headlines` and `everything`.
#[derive(Debug, Deserialize)]
pub(crate) struct NewsApiResponse {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<RawHeadline>,
}

/// One article object exactly as NewsAPI returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHeadline {
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// ISO-8601 timestamp string, e.g. `2026-01-01T00:00:00Z`.
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
