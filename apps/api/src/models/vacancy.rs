use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single job posting normalized across sources into one shape.
///
/// Fully self-contained and immutable once produced by its fetcher; the
/// aggregator only concatenates lists, never mutates fields. This is also the
/// on-disk cache snapshot format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedVacancy {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub url: String,
    /// Lower-cased skill keywords. Insertion order is irrelevant; scoring
    /// lower-cases again defensively.
    pub required_skills: Vec<String>,
    /// Required years of experience; 0 means "no stated requirement".
    pub experience_required: u32,
    /// Origin fetcher name. Display/debugging only, never used for scoring.
    pub source: String,
}

/// One ranked search result returned by `POST /api/vacancies/search`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub title: String,
    pub company: String,
    /// Match chance in [0, 100], one decimal place.
    pub chance: f64,
    pub location: String,
    pub url: String,
    pub source: String,
}

/// A manually entered vacancy as stored in Postgres.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyRow {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: Option<String>,
    pub source: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub experience_required: i32,
    pub salary: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct VacancyCreate {
    pub title: String,
    pub company: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub experience_required: i32,
    #[serde(default)]
    pub salary: Option<f64>,
}

/// Partial update payload; only provided fields are written.
#[derive(Debug, Default, Deserialize)]
pub struct VacancyUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub experience_required: Option<i32>,
    pub salary: Option<f64>,
}

fn default_location() -> String {
    "Remote".to_string()
}

fn default_source() -> String {
    "manual".to_string()
}
