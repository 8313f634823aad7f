//! Arbeitnow job-board API (free, no auth).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::extract::extract_experience_years;
use crate::models::vacancy::NormalizedVacancy;
use crate::scraper::{FetchError, JobBoard};

const API_URL: &str = "https://www.arbeitnow.com/api/job-board-api";
const SOURCE: &str = "arbeitnow";

/// Fetcher for Arbeitnow. The API has no search parameter, so the title
/// filter is applied client-side after mapping. Postings ship structured
/// tags, which are used directly as the skill list.
pub struct ArbeitnowBoard {
    client: Client,
}

impl ArbeitnowBoard {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ArbeitnowResponse {
    #[serde(default)]
    data: Vec<ArbeitnowJob>,
}

#[derive(Debug, Deserialize)]
struct ArbeitnowJob {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    tags: Vec<String>,
}

fn normalize(job: ArbeitnowJob) -> NormalizedVacancy {
    let required_skills = job.tags.iter().map(|tag| tag.to_lowercase()).collect();
    let experience_required = extract_experience_years(&job.description);
    NormalizedVacancy {
        title: job.title,
        company: if job.company_name.is_empty() {
            "Unknown Company".to_string()
        } else {
            job.company_name
        },
        location: if job.location.is_empty() {
            "Remote".to_string()
        } else {
            job.location
        },
        url: job.url,
        required_skills,
        experience_required,
        description: job.description,
        source: SOURCE.to_string(),
    }
}

fn title_matches(title: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(wanted) => title.to_lowercase().contains(&wanted.to_lowercase()),
        None => true,
    }
}

#[async_trait]
impl JobBoard for ArbeitnowBoard {
    fn name(&self) -> &'static str {
        SOURCE
    }

    async fn fetch(
        &self,
        job_title: Option<&str>,
    ) -> Result<Vec<NormalizedVacancy>, FetchError> {
        let body = self
            .client
            .get(API_URL)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let payload: ArbeitnowResponse = serde_json::from_str(&body)?;

        Ok(payload
            .data
            .into_iter()
            .map(normalize)
            .filter(|vacancy| title_matches(&vacancy.title, job_title))
            .collect())
    }
}
