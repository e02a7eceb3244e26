use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Config(#[from] headline_core::ConfigError),

    /// Every query shape failed or came back empty.
    #[error("no data available")]
    NoData,

    #[error("failed to build headline source: {0}")]
    Source(#[from] headline_newsapi::NewsApiError),

    #[error(transparent)]
    Store(#[from] headline_db::DbError),
}
