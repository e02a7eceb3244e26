use chrono::Utc;
use headline_core::AppConfig;
use headline_ingest::{
    collect_articles, news_client_from_config, run_ingestion_from_config, SourcePlan,
};

/// Run one ingestion and print the counts.
///
/// # Errors
///
/// Returns an error if `NEWS_API_KEY` is missing, every query shape came
/// back empty, or the upsert fails.
pub(crate) async fn run_ingest(config: &AppConfig, pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let report = run_ingestion_from_config(config, pool).await?;
    println!(
        "fetched {} headline(s), normalized {}, wrote {} article(s)",
        report.fetched, report.normalized, report.written
    );
    Ok(())
}

/// Fetch, normalize and dedupe without writing, then list what would be stored.
///
/// # Errors
///
/// Returns an error if `NEWS_API_KEY` is missing or every query shape came
/// back empty.
pub(crate) async fn run_ingest_dry(config: &AppConfig) -> anyhow::Result<()> {
    let client = news_client_from_config(config)?;
    let plan = SourcePlan::from_app_config(config);
    let collected = collect_articles(&client, &plan, Utc::now().date_naive()).await?;

    println!(
        "dry-run: fetched {} headline(s), normalized {}, would write {} article(s)",
        collected.fetched,
        collected.normalized,
        collected.articles.len()
    );
    for article in &collected.articles {
        println!(
            "  {}  {}  {}",
            article.published_at.format("%Y-%m-%d %H:%M"),
            article.title,
            article.url
        );
    }
    Ok(())
}
