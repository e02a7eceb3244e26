use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized news article, keyed by `url`.
///
/// Built by the ingestion normalizer from raw headline records and handed to
/// the store as-is. `title` and `url` are never empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub published_at: DateTime<Utc>,
    /// Outlet name as reported upstream (`source.name`).
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
