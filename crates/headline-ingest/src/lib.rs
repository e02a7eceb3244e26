//! News ingestion pipeline.
//!
//! Pulls raw headlines from the three `NewsAPI` query shapes (with the
//! recency fallback), normalizes them into [`headline_core::Article`]s,
//! collapses duplicate urls, and upserts the batch into the article store.

pub mod dedupe;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod store;

pub use dedupe::dedupe_by_url;
pub use error::IngestError;
pub use fallback::{needs_fallback, MIN_FRESH_HEADLINES};
pub use normalize::{normalize_headline, normalize_headlines};
pub use pipeline::{
    collect_articles, news_client_from_config, run_ingestion, run_ingestion_from_config,
    CollectedArticles, IngestReport,
};
pub use source::{collect_headlines, HeadlineSource, SourcePlan};
pub use store::ArticleStore;
