use chrono::{Duration, Utc};
use headline_core::AppConfig;
use headline_digest::{compose_digest, Digest, GeminiClient};
use headline_ingest::ArticleStore;

/// Read the last `days` of articles and print a digest.
///
/// # Errors
///
/// Returns an error if `GEMINI_API_KEY` is missing, the read fails, or the
/// window holds no articles.
pub(crate) async fn run_digest(
    config: &AppConfig,
    pool: &sqlx::PgPool,
    days: i64,
) -> anyhow::Result<()> {
    let api_key = config.require_gemini_api_key()?;
    let generator = GeminiClient::new(api_key, &config.gemini_model, config.request_timeout_secs)?;

    let since = Utc::now() - Duration::days(days);
    let articles = pool.list_articles_since(since).await?;
    tracing::info!(days, count = articles.len(), "loaded articles for digest");

    match compose_digest(&generator, &articles).await? {
        Digest::Generated { text } => println!("{text}"),
        Digest::Fallback { text, reason } => {
            eprintln!("warning: digest generation failed ({reason})");
            println!("{text}");
        }
    }
    Ok(())
}
