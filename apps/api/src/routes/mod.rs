pub mod health;
pub mod resumes;
pub mod search;
pub mod vacancies;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching
        .route("/api/vacancies/search", post(search::handle_search))
        // Vacancy CRUD
        .route(
            "/api/vacancies",
            get(vacancies::handle_list).post(vacancies::handle_create),
        )
        .route(
            "/api/vacancies/:id",
            get(vacancies::handle_get)
                .put(vacancies::handle_update)
                .delete(vacancies::handle_delete),
        )
        // Resumes
        .route(
            "/api/resumes",
            get(resumes::handle_list).post(resumes::handle_upload),
        )
        .with_state(state)
}
