use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Outcome of analyzing one resume file.
///
/// `error` set means text extraction failed (missing, unreadable, or
/// unsupported file); the signal fields are then empty. This is a valid
/// result, not a failure of the analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub text_preview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResumeAnalysis {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            skills: Vec::new(),
            experience_years: 0,
            text_preview: String::new(),
            error: Some(reason.into()),
        }
    }
}

/// Candidate signals consumed by the match scorer.
#[derive(Debug, Clone)]
pub struct CandidateProfile {
    /// Lower-cased skill set.
    pub skills: HashSet<String>,
    pub experience_years: u32,
    /// Set when no resume was available or extraction failed. Such a profile
    /// scores 0 against every vacancy but never fails a request.
    pub error: Option<String>,
}

impl CandidateProfile {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            skills: HashSet::new(),
            experience_years: 0,
            error: Some(reason.into()),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.error.is_some()
    }
}

impl From<&ResumeAnalysis> for CandidateProfile {
    fn from(analysis: &ResumeAnalysis) -> Self {
        Self {
            skills: analysis.skills.iter().map(|s| s.to_lowercase()).collect(),
            experience_years: analysis.experience_years,
            error: analysis.error.clone(),
        }
    }
}

/// An uploaded resume as recorded in Postgres.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i32,
    pub file_name: String,
    pub file_path: String,
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub uploaded_at: DateTime<Utc>,
}
