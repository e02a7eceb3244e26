//! Article store abstraction, implemented for the Postgres pool.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use headline_core::Article;
use headline_db::DbError;
use sqlx::PgPool;

/// Persistent article store keyed by `url`.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Insert-or-overwrite every article in one atomic batch.
    ///
    /// Returns the number of rows written. The batch must already be unique
    /// by `url`.
    async fn upsert_articles(&self, articles: &[Article]) -> Result<u64, DbError>;

    /// Articles published at or after `since`, newest first.
    async fn list_articles_since(&self, since: DateTime<Utc>) -> Result<Vec<Article>, DbError>;
}

#[async_trait]
impl ArticleStore for PgPool {
    async fn upsert_articles(&self, articles: &[Article]) -> Result<u64, DbError> {
        headline_db::upsert_articles(self, articles).await
    }

    async fn list_articles_since(&self, since: DateTime<Utc>) -> Result<Vec<Article>, DbError> {
        let rows = headline_db::list_articles_since(self, since).await?;
        Ok(rows.into_iter().map(Article::from).collect())
    }
}
