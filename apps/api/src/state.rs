use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::scraper::VacancyAggregator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// The one aggregator instance, built at startup and shared by handle.
    pub aggregator: Arc<VacancyAggregator>,
    pub config: Config,
}
