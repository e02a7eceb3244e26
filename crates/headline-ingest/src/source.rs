//! Headline source abstraction and the three-shape fan-in.

use async_trait::async_trait;
use chrono::NaiveDate;
use headline_core::AppConfig;
use headline_newsapi::{HeadlineQuery, NewsApiClient, NewsApiError, RawHeadline};

use crate::error::IngestError;
use crate::fallback::needs_fallback;

/// Anything that can answer a [`HeadlineQuery`] with raw headlines.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    async fn fetch(&self, query: &HeadlineQuery) -> Result<Vec<RawHeadline>, NewsApiError>;
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    async fn fetch(&self, query: &HeadlineQuery) -> Result<Vec<RawHeadline>, NewsApiError> {
        NewsApiClient::fetch(self, query).await
    }
}

/// The three query shapes issued by one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlan {
    pub top: HeadlineQuery,
    pub category: HeadlineQuery,
    pub fallback: HeadlineQuery,
}

impl SourcePlan {
    #[must_use]
    pub fn new(region: &str, category: &str, fallback_query: &str) -> Self {
        Self {
            top: HeadlineQuery::TopHeadlines {
                country: region.to_string(),
            },
            category: HeadlineQuery::Category {
                country: region.to_string(),
                category: category.to_string(),
            },
            fallback: HeadlineQuery::Everything {
                query: fallback_query.to_string(),
            },
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(
            &config.news_region,
            &config.news_category,
            &config.news_fallback_query,
        )
    }
}

/// Fetch one shape, mapping failure to an empty result.
async fn fetch_shape<S>(source: &S, query: &HeadlineQuery) -> Vec<RawHeadline>
where
    S: HeadlineSource + ?Sized,
{
    match source.fetch(query).await {
        Ok(headlines) => {
            tracing::debug!(
                query = query.label(),
                count = headlines.len(),
                "collected headlines"
            );
            headlines
        }
        Err(e) => {
            tracing::warn!(
                query = query.label(),
                error = %e,
                "headline fetch failed"
            );
            Vec::new()
        }
    }
}

/// Collect raw headlines for one ingestion run.
///
/// Top headlines and the category query run concurrently and are
/// concatenated in that order. The keyword fallback runs afterwards, only
/// when [`needs_fallback`] says the combined set is too thin or stale, and
/// its results are appended. A failed shape is logged and counts as empty.
///
/// # Errors
///
/// Returns [`IngestError::NoData`] if every issued shape yielded nothing.
pub async fn collect_headlines<S>(
    source: &S,
    plan: &SourcePlan,
    today: NaiveDate,
) -> Result<Vec<RawHeadline>, IngestError>
where
    S: HeadlineSource + ?Sized,
{
    let (top, category) = tokio::join!(
        fetch_shape(source, &plan.top),
        fetch_shape(source, &plan.category)
    );

    let mut headlines = top;
    headlines.extend(category);

    if needs_fallback(&headlines, today) {
        tracing::info!(
            combined = headlines.len(),
            "primary results thin or stale, issuing fallback query"
        );
        headlines.extend(fetch_shape(source, &plan.fallback).await);
    }

    if headlines.is_empty() {
        return Err(IngestError::NoData);
    }
    Ok(headlines)
}
