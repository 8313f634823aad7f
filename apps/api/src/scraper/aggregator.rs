//! Fans one fetch across every registered job board and keeps the cache
//! snapshot fresh.

use tracing::{info, warn};

use crate::models::vacancy::NormalizedVacancy;
use crate::scraper::{JobBoard, VacancyCache};

/// When `fetch_all` overwrites the cache snapshot.
///
/// `Always` is the reference behavior: the merged result is written even when
/// every source came back empty, so an all-sources-down cycle erases a
/// previously good snapshot. `NonEmptyOnly` keeps the last good snapshot in
/// that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheWritePolicy {
    #[default]
    Always,
    NonEmptyOnly,
}

/// Orchestrates all job boards. Built once at startup and shared by handle;
/// holds no request state.
pub struct VacancyAggregator {
    boards: Vec<Box<dyn JobBoard>>,
    cache: VacancyCache,
    write_policy: CacheWritePolicy,
}

impl VacancyAggregator {
    pub fn new(
        boards: Vec<Box<dyn JobBoard>>,
        cache: VacancyCache,
        write_policy: CacheWritePolicy,
    ) -> Self {
        Self {
            boards,
            cache,
            write_policy,
        }
    }

    /// Invokes every board in registration order and concatenates whatever
    /// they return, preserving that order. A failing board is logged and
    /// contributes nothing; it never aborts the rest. The merged result is
    /// then written to the cache per the configured policy.
    pub async fn fetch_all(&self, job_title: Option<&str>) -> Vec<NormalizedVacancy> {
        let mut merged = Vec::new();
        for board in &self.boards {
            match board.fetch(job_title).await {
                Ok(vacancies) => {
                    info!(source = board.name(), count = vacancies.len(), "fetched vacancies");
                    merged.extend(vacancies);
                }
                Err(e) => {
                    warn!(source = board.name(), error = %e, "job board fetch failed, skipping source");
                }
            }
        }

        let skip_write =
            self.write_policy == CacheWritePolicy::NonEmptyOnly && merged.is_empty();
        if !skip_write {
            if let Err(e) = self.cache.write(&merged) {
                warn!(error = %e, "failed to refresh vacancy cache");
            }
        }

        merged
    }

    /// The last cached snapshot. The matching pipeline falls back to this
    /// when a live fetch yields nothing; the aggregator itself never
    /// substitutes cache data for a live result.
    pub fn cached(&self) -> Vec<NormalizedVacancy> {
        self.cache.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::FetchError;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct StaticBoard {
        name: &'static str,
        vacancies: Vec<NormalizedVacancy>,
    }

    #[async_trait]
    impl JobBoard for StaticBoard {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn fetch(
            &self,
            _job_title: Option<&str>,
        ) -> Result<Vec<NormalizedVacancy>, FetchError> {
            Ok(self.vacancies.clone())
        }
    }

    struct FailingBoard;

    #[async_trait]
    impl JobBoard for FailingBoard {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn fetch(
            &self,
            _job_title: Option<&str>,
        ) -> Result<Vec<NormalizedVacancy>, FetchError> {
            Err(FetchError::Parse(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ))
        }
    }

    fn vacancy(title: &str, source: &str) -> NormalizedVacancy {
        NormalizedVacancy {
            title: title.to_string(),
            company: "Acme".to_string(),
            description: String::new(),
            location: "Remote".to_string(),
            url: String::new(),
            required_skills: vec!["python".to_string()],
            experience_required: 0,
            source: source.to_string(),
        }
    }

    fn cache_in(dir: &TempDir) -> VacancyCache {
        VacancyCache::new(dir.path().join("vacancies.json"))
    }

    #[tokio::test]
    async fn test_merges_in_registration_order() {
        let dir = TempDir::new().unwrap();
        let boards: Vec<Box<dyn JobBoard>> = vec![
            Box::new(StaticBoard {
                name: "first",
                vacancies: vec![vacancy("A", "first"), vacancy("B", "first")],
            }),
            Box::new(StaticBoard {
                name: "second",
                vacancies: vec![vacancy("C", "second")],
            }),
        ];
        let aggregator =
            VacancyAggregator::new(boards, cache_in(&dir), CacheWritePolicy::Always);
        let merged = aggregator.fetch_all(None).await;
        let titles: Vec<&str> = merged.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_failing_board_is_isolated() {
        let dir = TempDir::new().unwrap();
        let boards: Vec<Box<dyn JobBoard>> = vec![
            Box::new(FailingBoard),
            Box::new(StaticBoard {
                name: "working",
                vacancies: vec![vacancy("A", "working")],
            }),
        ];
        let aggregator =
            VacancyAggregator::new(boards, cache_in(&dir), CacheWritePolicy::Always);
        let merged = aggregator.fetch_all(None).await;
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "A");
    }

    #[tokio::test]
    async fn test_successful_fetch_refreshes_cache() {
        let dir = TempDir::new().unwrap();
        let boards: Vec<Box<dyn JobBoard>> = vec![Box::new(StaticBoard {
            name: "only",
            vacancies: vec![vacancy("A", "only")],
        })];
        let aggregator =
            VacancyAggregator::new(boards, cache_in(&dir), CacheWritePolicy::Always);
        let merged = aggregator.fetch_all(None).await;
        assert_eq!(aggregator.cached(), merged);
    }

    #[tokio::test]
    async fn test_always_policy_overwrites_snapshot_on_empty_fetch() {
        // Reference behavior: an all-empty cycle erases the previous snapshot.
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        cache.write(&[vacancy("old", "only")]).unwrap();

        let aggregator =
            VacancyAggregator::new(Vec::new(), cache, CacheWritePolicy::Always);
        let merged = aggregator.fetch_all(None).await;
        assert!(merged.is_empty());
        assert!(aggregator.cached().is_empty());
    }

    #[tokio::test]
    async fn test_non_empty_policy_preserves_snapshot_on_empty_fetch() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        cache.write(&[vacancy("old", "only")]).unwrap();

        let aggregator =
            VacancyAggregator::new(Vec::new(), cache, CacheWritePolicy::NonEmptyOnly);
        let merged = aggregator.fetch_all(None).await;
        assert!(merged.is_empty());
        assert_eq!(aggregator.cached().len(), 1);
        assert_eq!(aggregator.cached()[0].title, "old");
    }
}
