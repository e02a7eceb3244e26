//! Typed client for the NewsAPI v2 REST API.
//!
//! Covers the three query shapes the ingestion pipeline uses: country top
//! headlines, category-scoped top headlines, and the recency-sorted
//! `everything` keyword search.

pub mod client;
pub mod error;
pub mod types;

pub use client::{HeadlineQuery, NewsApiClient};
pub use error::NewsApiError;
pub use types::{RawHeadline, RawSource};
