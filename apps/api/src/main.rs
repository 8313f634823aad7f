mod config;
mod db;
mod errors;
mod extract;
mod matching;
mod models;
mod resume;
mod routes;
mod scraper;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::routes::build_router;
use crate::scraper::{ArbeitnowBoard, JobBoard, RemotiveBoard, VacancyAggregator, VacancyCache};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // One HTTP client shared by every job board, carrying the per-call timeout.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .build()?;

    // Job boards in registration order; merged results follow this order.
    let boards: Vec<Box<dyn JobBoard>> = vec![
        Box::new(ArbeitnowBoard::new(client.clone())),
        Box::new(RemotiveBoard::new(client)),
    ];

    let cache = VacancyCache::new(&config.cache_file);
    let aggregator = Arc::new(VacancyAggregator::new(
        boards,
        cache,
        config.cache_write_policy,
    ));
    info!(
        cache_file = %config.cache_file,
        policy = ?config.cache_write_policy,
        "Vacancy aggregator initialized"
    );

    // Build app state
    let state = AppState {
        db,
        aggregator,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
