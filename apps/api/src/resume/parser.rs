//! Resume text extraction and signal analysis.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::extract::{extract_experience_years, extract_skills};
use crate::models::resume::ResumeAnalysis;

/// Characters of extracted text echoed back as a preview.
const PREVIEW_LEN: usize = 500;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("unsupported resume format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read resume: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to extract pdf text: {0}")]
    Pdf(String),
}

/// Raw text of a resume file. `.pdf` and `.txt` are supported; anything else
/// is an unsupported format.
pub fn extract_text(path: &Path) -> Result<String, ResumeError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path).map_err(|e| ResumeError::Pdf(e.to_string())),
        "txt" | "text" => Ok(fs::read_to_string(path)?),
        other => Err(ResumeError::UnsupportedFormat(other.to_string())),
    }
}

/// Extracts candidate signals from a resume file.
///
/// Failures never propagate: an unreadable or unsupported file produces an
/// analysis with `error` set and empty signals, which the pipeline turns into
/// an unavailable profile.
pub fn analyze_resume(path: &Path) -> ResumeAnalysis {
    let text = match extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "resume analysis failed");
            return ResumeAnalysis::failed(e.to_string());
        }
    };

    let skills = extract_skills(&text);
    let experience_years = extract_experience_years(&text);
    let text_preview: String = text.chars().take(PREVIEW_LEN).collect();

    ResumeAnalysis {
        skills,
        experience_years,
        text_preview,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_analyze_txt_resume() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(
            &path,
            "Python and Django developer with 3 years of experience.",
        )
        .unwrap();

        let analysis = analyze_resume(&path);
        assert!(analysis.error.is_none());
        assert!(analysis.skills.contains(&"python".to_string()));
        assert!(analysis.skills.contains(&"django".to_string()));
        assert_eq!(analysis.experience_years, 3);
        assert!(analysis.text_preview.starts_with("Python"));
    }

    #[test]
    fn test_unsupported_format_degrades_to_error_analysis() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.docx");
        fs::write(&path, b"not really a docx").unwrap();

        let analysis = analyze_resume(&path);
        assert!(analysis.error.is_some());
        assert!(analysis.skills.is_empty());
        assert_eq!(analysis.experience_years, 0);
    }

    #[test]
    fn test_missing_file_degrades_to_error_analysis() {
        let analysis = analyze_resume(Path::new("/nonexistent/resume.txt"));
        assert!(analysis.error.is_some());
    }

    #[test]
    fn test_preview_is_truncated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, "x".repeat(2000)).unwrap();

        let analysis = analyze_resume(&path);
        assert_eq!(analysis.text_preview.chars().count(), 500);
    }
}
