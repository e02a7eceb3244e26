//! Built-in sample articles for local setups without a NewsAPI key.

use chrono::{DateTime, Utc};
use headline_core::Article;
use sqlx::PgPool;

use crate::articles::upsert_articles;
use crate::DbError;

/// The three sample articles, all stamped with `published_at`.
#[must_use]
pub fn sample_articles(published_at: DateTime<Utc>) -> Vec<Article> {
    let sample = |title: &str, description: &str, url: &str, source: &str, content: &str| {
        Article {
            title: title.to_string(),
            description: Some(description.to_string()),
            url: url.to_string(),
            published_at,
            source: Some(source.to_string()),
            content: Some(content.to_string()),
        }
    };

    vec![
        sample(
            "Advancements in Antigravity Propulsion Systems",
            "New research suggests a breakthrough in field-effect propulsion could revolutionize space travel.",
            "https://example.com/antigravity-news-1",
            "Science Daily",
            "Detailed content about antigravity experiments...",
        ),
        sample(
            "Global Markets React to AI Developments",
            "Trading volumes hit record highs as new AI analysis tools are deployed across major exchanges.",
            "https://example.com/ai-markets-2",
            "Financial Times",
            "Analysis of market trends...",
        ),
        sample(
            "Sustainability Trends in Modern Web Apps",
            "Developers are prioritizing energy-efficient coding practices as global energy costs rise.",
            "https://example.com/green-web-3",
            "TechCrunch",
            "Tips for greener deployments...",
        ),
    ]
}

/// Upsert the sample articles, stamped with the current time.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the upsert fails.
pub async fn seed_sample_articles(pool: &PgPool) -> Result<u64, DbError> {
    upsert_articles(pool, &sample_articles(Utc::now())).await
}
