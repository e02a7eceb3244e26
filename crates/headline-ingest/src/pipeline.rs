//! Ingestion orchestration: fetch, normalize, dedupe, upsert.

use chrono::{NaiveDate, Utc};
use headline_core::{AppConfig, Article};
use headline_newsapi::NewsApiClient;
use serde::Serialize;

use crate::dedupe::dedupe_by_url;
use crate::error::IngestError;
use crate::normalize::normalize_headlines;
use crate::source::{collect_headlines, HeadlineSource, SourcePlan};
use crate::store::ArticleStore;

/// Counts from one ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Raw records returned by all issued query shapes.
    pub fetched: usize,
    /// Records that survived normalization, duplicates included.
    pub normalized: usize,
    /// Rows inserted or overwritten by the upsert.
    pub written: u64,
}

/// Normalized, url-unique articles plus the counts that produced them.
#[derive(Debug, Clone)]
pub struct CollectedArticles {
    pub fetched: usize,
    pub normalized: usize,
    pub articles: Vec<Article>,
}

/// Fetch, normalize, and dedupe without touching the store.
///
/// # Errors
///
/// Returns [`IngestError::NoData`] when every query shape came back empty.
pub async fn collect_articles<S>(
    source: &S,
    plan: &SourcePlan,
    today: NaiveDate,
) -> Result<CollectedArticles, IngestError>
where
    S: HeadlineSource + ?Sized,
{
    let raw = collect_headlines(source, plan, today).await?;
    let fetched = raw.len();

    let normalized = normalize_headlines(raw);
    let normalized_count = normalized.len();
    let articles = dedupe_by_url(normalized);

    tracing::debug!(
        fetched,
        normalized = normalized_count,
        unique = articles.len(),
        "prepared article batch"
    );

    Ok(CollectedArticles {
        fetched,
        normalized: normalized_count,
        articles,
    })
}

/// Run one full ingestion against the given source and store.
///
/// An empty batch after normalization still succeeds with `written = 0`.
///
/// # Errors
///
/// - [`IngestError::NoData`] when every query shape came back empty.
/// - [`IngestError::Store`] when the batch upsert fails; nothing is written.
pub async fn run_ingestion<S, T>(
    source: &S,
    store: &T,
    plan: &SourcePlan,
    today: NaiveDate,
) -> Result<IngestReport, IngestError>
where
    S: HeadlineSource + ?Sized,
    T: ArticleStore + ?Sized,
{
    let collected = collect_articles(source, plan, today).await?;
    let written = store.upsert_articles(&collected.articles).await?;

    let report = IngestReport {
        fetched: collected.fetched,
        normalized: collected.normalized,
        written,
    };
    tracing::info!(
        fetched = report.fetched,
        normalized = report.normalized,
        written = report.written,
        "ingestion complete"
    );
    Ok(report)
}

/// Build a [`NewsApiClient`] from config.
///
/// # Errors
///
/// - [`IngestError::Config`] if `NEWS_API_KEY` is not set.
/// - [`IngestError::Source`] if the HTTP client cannot be constructed.
pub fn news_client_from_config(config: &AppConfig) -> Result<NewsApiClient, IngestError> {
    let api_key = config.require_news_api_key()?;
    let client = NewsApiClient::new(api_key, config.request_timeout_secs)?
        .with_page_size(config.news_page_size);
    Ok(client)
}

/// Run one ingestion against live `NewsAPI`, dated by the current UTC day.
///
/// # Errors
///
/// See [`news_client_from_config`] and [`run_ingestion`].
pub async fn run_ingestion_from_config<T>(
    config: &AppConfig,
    store: &T,
) -> Result<IngestReport, IngestError>
where
    T: ArticleStore + ?Sized,
{
    let client = news_client_from_config(config)?;
    let plan = SourcePlan::from_app_config(config);
    run_ingestion(&client, store, &plan, Utc::now().date_naive()).await
}
