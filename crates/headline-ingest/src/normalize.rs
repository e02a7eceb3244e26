//! Normalization from raw `NewsAPI` records to [`Article`].

use chrono::{DateTime, Utc};
use headline_core::Article;
use headline_newsapi::RawHeadline;

/// Maps one raw headline to an [`Article`].
///
/// Returns `None` when `title`, `url`, or a parseable `publishedAt` is
/// missing. Empty strings count as missing.
#[must_use]
pub fn normalize_headline(raw: RawHeadline) -> Option<Article> {
    let title = raw.title.filter(|s| !s.trim().is_empty())?;
    let url = raw.url.filter(|s| !s.trim().is_empty())?;
    let published_at = raw
        .published_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())?
        .with_timezone(&Utc);

    Some(Article {
        title,
        description: raw.description,
        url,
        published_at,
        source: raw.source.and_then(|s| s.name),
        content: raw.content,
    })
}

/// Normalizes a batch, silently dropping records missing mandatory fields.
///
/// Retained records keep their input order.
#[must_use]
pub fn normalize_headlines(raw: Vec<RawHeadline>) -> Vec<Article> {
    let total = raw.len();
    let articles: Vec<Article> = raw.into_iter().filter_map(normalize_headline).collect();

    let dropped = total - articles.len();
    if dropped > 0 {
        tracing::debug!(total, dropped, "dropped headlines missing mandatory fields");
    }
    articles
}
