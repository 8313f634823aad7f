//! Top-level matching orchestration: candidate profile in, ranked vacancy
//! matches out.

use std::path::Path;

use tracing::{debug, info};

use crate::matching::scorer::match_chance;
use crate::models::resume::CandidateProfile;
use crate::models::vacancy::{MatchResult, NormalizedVacancy};
use crate::resume::{analyze_resume, latest_resume};
use crate::scraper::VacancyAggregator;

/// Matches beyond this rank are cut from the response.
const MAX_RESULTS: usize = 20;

/// Ranks live vacancies against the most recently uploaded resume.
///
/// Always returns a (possibly empty) list: source failures degrade per
/// board, a dead live fetch falls back to the cache snapshot, and a missing
/// or unreadable resume scores everything at 0 instead of failing.
pub async fn find_matches(
    aggregator: &VacancyAggregator,
    upload_dir: &Path,
    job_title: Option<&str>,
) -> Vec<MatchResult> {
    let profile = resolve_profile(upload_dir);

    let mut vacancies = aggregator.fetch_all(job_title).await;
    if vacancies.is_empty() {
        info!("live fetch returned nothing, falling back to cached snapshot");
        vacancies = aggregator.cached();
    }
    if vacancies.is_empty() {
        return Vec::new();
    }

    rank(&profile, vacancies)
}

/// Candidate profile from the most recently uploaded resume. No upload or a
/// failed analysis yields an unavailable profile.
fn resolve_profile(upload_dir: &Path) -> CandidateProfile {
    let Some(path) = latest_resume(upload_dir) else {
        debug!(dir = %upload_dir.display(), "no uploaded resume found");
        return CandidateProfile::unavailable("no resume uploaded");
    };
    let analysis = analyze_resume(&path);
    CandidateProfile::from(&analysis)
}

/// Scores, sorts descending with a stable sort (ties keep the order the
/// aggregator produced), and truncates to the top results.
fn rank(profile: &CandidateProfile, vacancies: Vec<NormalizedVacancy>) -> Vec<MatchResult> {
    let mut scored: Vec<(f64, NormalizedVacancy)> = vacancies
        .into_iter()
        .map(|vacancy| (match_chance(profile, &vacancy), vacancy))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(MAX_RESULTS);

    scored
        .into_iter()
        .map(|(chance, vacancy)| MatchResult {
            title: vacancy.title,
            company: vacancy.company,
            chance,
            location: vacancy.location,
            url: vacancy.url,
            source: vacancy.source,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::{
        CacheWritePolicy, FetchError, JobBoard, VacancyCache,
    };
    use async_trait::async_trait;
    use std::fs;
    use tempfile::TempDir;

    struct StaticBoard {
        vacancies: Vec<NormalizedVacancy>,
    }

    #[async_trait]
    impl JobBoard for StaticBoard {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch(
            &self,
            _job_title: Option<&str>,
        ) -> Result<Vec<NormalizedVacancy>, FetchError> {
            Ok(self.vacancies.clone())
        }
    }

    fn vacancy(title: &str, skills: &[&str], experience: u32) -> NormalizedVacancy {
        NormalizedVacancy {
            title: title.to_string(),
            company: "Acme".to_string(),
            description: String::new(),
            location: "Remote".to_string(),
            url: String::new(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_required: experience,
            source: "static".to_string(),
        }
    }

    fn aggregator_with(
        vacancies: Vec<NormalizedVacancy>,
        cache_dir: &TempDir,
        policy: CacheWritePolicy,
    ) -> VacancyAggregator {
        let boards: Vec<Box<dyn JobBoard>> = if vacancies.is_empty() {
            Vec::new()
        } else {
            vec![Box::new(StaticBoard { vacancies })]
        };
        let cache = VacancyCache::new(cache_dir.path().join("vacancies.json"));
        VacancyAggregator::new(boards, cache, policy)
    }

    fn upload_dir_with_resume(text: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("resume.txt"), text).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_everything_empty_yields_empty_list() {
        let cache_dir = TempDir::new().unwrap();
        let uploads = TempDir::new().unwrap();
        let aggregator = aggregator_with(Vec::new(), &cache_dir, CacheWritePolicy::Always);

        let matches = find_matches(&aggregator, uploads.path(), Some("rust")).await;
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_scores_against_uploaded_resume() {
        let cache_dir = TempDir::new().unwrap();
        let uploads =
            upload_dir_with_resume("Python and Django developer with 3 years of experience.");
        let aggregator = aggregator_with(
            vec![vacancy("Backend", &["python", "django", "postgresql"], 2)],
            &cache_dir,
            CacheWritePolicy::Always,
        );

        let matches = find_matches(&aggregator, uploads.path(), None).await;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].chance, 76.7);
        assert_eq!(matches[0].title, "Backend");
        assert_eq!(matches[0].source, "static");
    }

    #[tokio::test]
    async fn test_no_resume_scores_everything_zero_but_still_lists() {
        let cache_dir = TempDir::new().unwrap();
        let uploads = TempDir::new().unwrap();
        let aggregator = aggregator_with(
            vec![vacancy("A", &["python"], 0), vacancy("B", &["rust"], 0)],
            &cache_dir,
            CacheWritePolicy::Always,
        );

        let matches = find_matches(&aggregator, uploads.path(), None).await;
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.chance == 0.0));
    }

    #[tokio::test]
    async fn test_falls_back_to_cache_when_live_fetch_is_empty() {
        let cache_dir = TempDir::new().unwrap();
        let uploads =
            upload_dir_with_resume("Python developer, 5 years of experience.");

        // Seed the cache, then aggregate with no live boards under the
        // non-empty policy so the seed survives the empty cycle.
        let cache = VacancyCache::new(cache_dir.path().join("vacancies.json"));
        cache.write(&[vacancy("Cached", &["python"], 1)]).unwrap();
        let aggregator = aggregator_with(Vec::new(), &cache_dir, CacheWritePolicy::NonEmptyOnly);

        let matches = find_matches(&aggregator, uploads.path(), None).await;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Cached");
        assert_eq!(matches[0].chance, 100.0);
    }

    #[tokio::test]
    async fn test_sorted_descending_with_stable_ties() {
        let cache_dir = TempDir::new().unwrap();
        let uploads = upload_dir_with_resume("Python developer.");
        let aggregator = aggregator_with(
            vec![
                vacancy("tie-first", &["python", "rust"], 0),
                vacancy("winner", &["python"], 0),
                vacancy("tie-second", &["rust", "python"], 0),
            ],
            &cache_dir,
            CacheWritePolicy::Always,
        );

        let matches = find_matches(&aggregator, uploads.path(), None).await;
        let titles: Vec<&str> = matches.iter().map(|m| m.title.as_str()).collect();
        // Equal-chance vacancies keep their aggregation order.
        assert_eq!(titles, vec!["winner", "tie-first", "tie-second"]);
    }

    #[tokio::test]
    async fn test_truncates_to_twenty_results() {
        let cache_dir = TempDir::new().unwrap();
        let uploads = upload_dir_with_resume("Python developer.");
        let many: Vec<NormalizedVacancy> = (0..25)
            .map(|i| vacancy(&format!("Job {i}"), &["python"], 0))
            .collect();
        let aggregator = aggregator_with(many, &cache_dir, CacheWritePolicy::Always);

        let matches = find_matches(&aggregator, uploads.path(), None).await;
        assert_eq!(matches.len(), 20);
        // Ties keep input order, so truncation keeps the first twenty.
        assert_eq!(matches[0].title, "Job 0");
        assert_eq!(matches[19].title, "Job 19");
    }
}
