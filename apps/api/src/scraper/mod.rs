//! Vacancy scraping: per-board fetchers, the aggregator that fans across
//! them, and the durable fallback cache.

pub mod aggregator;
pub mod arbeitnow;
pub mod cache;
pub mod remotive;

pub use aggregator::{CacheWritePolicy, VacancyAggregator};
pub use arbeitnow::ArbeitnowBoard;
pub use cache::VacancyCache;
pub use remotive::RemotiveBoard;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::vacancy::NormalizedVacancy;

/// One external job board.
///
/// Implementations are independent and interchangeable: the aggregator treats
/// every board identically and inspects the returned `Result` instead of
/// relying on exceptions for per-source fault isolation.
#[async_trait]
pub trait JobBoard: Send + Sync {
    /// Short identifier, also recorded as `source` on every vacancy produced.
    fn name(&self) -> &'static str;

    /// Fetches postings, optionally narrowed to a job title. Boards without
    /// server-side search apply the filter client-side after mapping.
    async fn fetch(&self, job_title: Option<&str>)
        -> Result<Vec<NormalizedVacancy>, FetchError>;
}

/// Why a single board's fetch produced nothing usable.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}
