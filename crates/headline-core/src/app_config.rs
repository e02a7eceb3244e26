use std::net::SocketAddr;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub news_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub news_region: String,
    pub news_category: String,
    pub news_fallback_query: String,
    pub news_page_size: u32,
    pub request_timeout_secs: u64,
    pub gemini_model: String,
    pub ingest_cron: String,
}

impl AppConfig {
    /// Returns the NewsAPI key, or a config error naming the missing variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `NEWS_API_KEY` was not set.
    pub fn require_news_api_key(&self) -> Result<&str, ConfigError> {
        self.news_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("NEWS_API_KEY".to_string()))
    }

    /// Returns the Gemini key, or a config error naming the missing variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `GEMINI_API_KEY` was not set.
    pub fn require_gemini_api_key(&self) -> Result<&str, ConfigError> {
        self.gemini_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field(
                "news_api_key",
                &self.news_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("news_region", &self.news_region)
            .field("news_category", &self.news_category)
            .field("news_fallback_query", &self.news_fallback_query)
            .field("news_page_size", &self.news_page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("gemini_model", &self.gemini_model)
            .field("ingest_cron", &self.ingest_cron)
            .finish()
    }
}
