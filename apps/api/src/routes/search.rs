use std::path::Path;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::matching::pipeline::find_matches;
use crate::models::vacancy::MatchResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Job title to narrow the search; blank means no filter.
    #[serde(default)]
    pub job_title: String,
}

/// POST /api/vacancies/search
///
/// Ranks live vacancies against the most recently uploaded resume. Always
/// answers with a (possibly empty) list: per-source failures, a dead cache,
/// and a missing resume all degrade instead of erroring.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<Vec<MatchResult>> {
    let title = request.job_title.trim();
    let filter = (!title.is_empty()).then_some(title);

    let matches = find_matches(
        &state.aggregator,
        Path::new(&state.config.upload_dir),
        filter,
    )
    .await;
    Json(matches)
}
