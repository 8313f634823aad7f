//! CRUD endpoints for manually entered vacancies.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::vacancy::{VacancyCreate, VacancyRow, VacancyUpdate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// GET /api/vacancies
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<VacancyRow>>, AppError> {
    let rows = sqlx::query_as::<_, VacancyRow>(
        "SELECT * FROM vacancies ORDER BY id OFFSET $1 LIMIT $2",
    )
    .bind(params.skip)
    .bind(params.limit)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/vacancies/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VacancyRow>, AppError> {
    let row = sqlx::query_as::<_, VacancyRow>("SELECT * FROM vacancies WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Vacancy not found".to_string()))?;
    Ok(Json(row))
}

/// POST /api/vacancies
pub async fn handle_create(
    State(state): State<AppState>,
    Json(vacancy): Json<VacancyCreate>,
) -> Result<(StatusCode, Json<VacancyRow>), AppError> {
    let row = sqlx::query_as::<_, VacancyRow>(
        r#"
        INSERT INTO vacancies
            (title, company, location, url, source, description,
             required_skills, experience_required, salary)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(&vacancy.title)
    .bind(&vacancy.company)
    .bind(&vacancy.location)
    .bind(&vacancy.url)
    .bind(&vacancy.source)
    .bind(&vacancy.description)
    .bind(&vacancy.required_skills)
    .bind(vacancy.experience_required)
    .bind(vacancy.salary)
    .fetch_one(&state.db)
    .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/vacancies/:id — updates only the provided fields.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update): Json<VacancyUpdate>,
) -> Result<Json<VacancyRow>, AppError> {
    let row = sqlx::query_as::<_, VacancyRow>(
        r#"
        UPDATE vacancies SET
            title = COALESCE($1, title),
            company = COALESCE($2, company),
            location = COALESCE($3, location),
            url = COALESCE($4, url),
            description = COALESCE($5, description),
            required_skills = COALESCE($6, required_skills),
            experience_required = COALESCE($7, experience_required),
            salary = COALESCE($8, salary)
        WHERE id = $9
        RETURNING *
        "#,
    )
    .bind(&update.title)
    .bind(&update.company)
    .bind(&update.location)
    .bind(&update.url)
    .bind(&update.description)
    .bind(&update.required_skills)
    .bind(update.experience_required)
    .bind(update.salary)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Vacancy not found".to_string()))?;
    Ok(Json(row))
}

/// DELETE /api/vacancies/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM vacancies WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Vacancy not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
