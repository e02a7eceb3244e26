//! Database operations for the `articles` table.

use chrono::{DateTime, Utc};
use headline_core::Article;
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `articles` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub source: Option<String>,
    pub content: Option<String>,
    /// Never written by ingestion; reserved for per-article summaries.
    pub summary: Option<String>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            title: row.title,
            description: row.description,
            url: row.url,
            published_at: row.published_at,
            source: row.source,
            content: row.content,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Upserts a batch of articles in one statement, keyed by `url`.
///
/// New urls are inserted; existing urls have `title`, `description`,
/// `published_at`, `source`, and `content` overwritten. The batch must not
/// repeat a `url`: Postgres rejects an `ON CONFLICT DO UPDATE` that touches
/// the same row twice, and the whole statement fails.
///
/// Returns the number of rows inserted or updated. An empty batch returns
/// `0` without touching the database.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the statement fails.
pub async fn upsert_articles(pool: &PgPool, articles: &[Article]) -> Result<u64, DbError> {
    if articles.is_empty() {
        return Ok(0);
    }

    let mut titles = Vec::with_capacity(articles.len());
    let mut descriptions = Vec::with_capacity(articles.len());
    let mut urls = Vec::with_capacity(articles.len());
    let mut published = Vec::with_capacity(articles.len());
    let mut sources = Vec::with_capacity(articles.len());
    let mut contents = Vec::with_capacity(articles.len());

    for article in articles {
        titles.push(article.title.clone());
        descriptions.push(article.description.clone());
        urls.push(article.url.clone());
        published.push(article.published_at);
        sources.push(article.source.clone());
        contents.push(article.content.clone());
    }

    let result = sqlx::query(
        "INSERT INTO articles (title, description, url, published_at, source, content) \
         SELECT * FROM UNNEST($1::text[], $2::text[], $3::text[], $4::timestamptz[], \
                              $5::text[], $6::text[]) \
         ON CONFLICT (url) DO UPDATE SET \
             title        = EXCLUDED.title, \
             description  = EXCLUDED.description, \
             published_at = EXCLUDED.published_at, \
             source       = EXCLUDED.source, \
             content      = EXCLUDED.content",
    )
    .bind(&titles)
    .bind(&descriptions)
    .bind(&urls)
    .bind(&published)
    .bind(&sources)
    .bind(&contents)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Lists articles published at or after `since`, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_articles_since(
    pool: &PgPool,
    since: DateTime<Utc>,
) -> Result<Vec<ArticleRow>, DbError> {
    let rows = sqlx::query_as::<_, ArticleRow>(
        "SELECT id, created_at, title, description, url, published_at, source, content, summary \
         FROM articles \
         WHERE published_at >= $1 \
         ORDER BY published_at DESC, id DESC",
    )
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Total number of stored articles.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_articles(pool: &PgPool) -> Result<i64, DbError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
