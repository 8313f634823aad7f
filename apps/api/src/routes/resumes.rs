//! Resume upload and listing.

use std::fs;
use std::path::PathBuf;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::{ResumeAnalysis, ResumeRow};
use crate::resume::analyze_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub id: i32,
    pub file_name: String,
    pub analysis: ResumeAnalysis,
}

/// POST /api/resumes
///
/// Accepts a multipart `file` field, stores it in the upload directory, and
/// records the extracted signals. A failed analysis still stores the upload;
/// the failure travels inside the analysis payload instead of erroring.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeUploadResponse>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = sanitize_file_name(field.file_name().unwrap_or("resume"));
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        let upload_dir = PathBuf::from(&state.config.upload_dir);
        fs::create_dir_all(&upload_dir).map_err(anyhow::Error::from)?;
        let path = upload_dir.join(&file_name);
        fs::write(&path, &data).map_err(anyhow::Error::from)?;

        let analysis = analyze_resume(&path);

        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (file_name, file_path, skills, experience_years)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&file_name)
        .bind(path.to_string_lossy().as_ref())
        .bind(&analysis.skills)
        .bind(analysis.experience_years as i32)
        .fetch_one(&state.db)
        .await?;

        return Ok((
            StatusCode::CREATED,
            Json(ResumeUploadResponse {
                id: row.id,
                file_name: row.file_name,
                analysis,
            }),
        ));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}

/// GET /api/resumes
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes ORDER BY uploaded_at DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// Keeps only the final path component and replaces suspicious characters, so
/// an uploaded name can never escape the upload directory.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "resume".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_file_name("resume.pdf"), "resume.pdf");
        assert_eq!(sanitize_file_name("Jane Doe CV.txt"), "Jane Doe CV.txt");
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name(r"C:\Users\x\cv.pdf"), "cv.pdf");
    }

    #[test]
    fn test_sanitize_replaces_suspicious_characters() {
        assert_eq!(sanitize_file_name("my:cv?.pdf"), "my_cv_.pdf");
    }

    #[test]
    fn test_sanitize_empty_name_falls_back() {
        assert_eq!(sanitize_file_name(""), "resume");
        assert_eq!(sanitize_file_name("..."), "resume");
    }
}
