//! Remotive remote-jobs API (free, no auth).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::extract::{extract_experience_years, extract_skills};
use crate::models::vacancy::NormalizedVacancy;
use crate::scraper::{FetchError, JobBoard};

const API_URL: &str = "https://remotive.com/api/remote-jobs";
const SOURCE: &str = "remotive";

/// The feed is unbounded; only the first `MAX_JOBS` postings are taken.
const MAX_JOBS: usize = 50;

/// Fetcher for Remotive. The API supports server-side title search via the
/// `search` query parameter. Postings carry no structured tags, so skills are
/// extracted from the description text.
pub struct RemotiveBoard {
    client: Client,
}

impl RemotiveBoard {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct RemotiveResponse {
    #[serde(default)]
    jobs: Vec<RemotiveJob>,
}

#[derive(Debug, Deserialize)]
struct RemotiveJob {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    candidate_required_location: String,
    #[serde(default)]
    url: String,
}

fn normalize(job: RemotiveJob) -> NormalizedVacancy {
    let required_skills = extract_skills(&job.description);
    let experience_required = extract_experience_years(&job.description);
    NormalizedVacancy {
        title: job.title,
        company: if job.company_name.is_empty() {
            "Unknown Company".to_string()
        } else {
            job.company_name
        },
        location: if job.candidate_required_location.is_empty() {
            "Remote".to_string()
        } else {
            job.candidate_required_location
        },
        url: job.url,
        required_skills,
        experience_required,
        description: job.description,
        source: SOURCE.to_string(),
    }
}

#[async_trait]
impl JobBoard for RemotiveBoard {
    fn name(&self) -> &'static str {
        SOURCE
    }

    async fn fetch(
        &self,
        job_title: Option<&str>,
    ) -> Result<Vec<NormalizedVacancy>, FetchError> {
        let mut request = self.client.get(API_URL);
        if let Some(title) = job_title {
            request = request.query(&[("search", title)]);
        }
        let body = request.send().await?.error_for_status()?.text().await?;
        let payload: RemotiveResponse = serde_json::from_str(&body)?;

        Ok(payload
            .jobs
            .into_iter()
            .take(MAX_JOBS)
            .map(normalize)
            .collect())
    }
}
