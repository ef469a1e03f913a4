use sea_orm::Database;
use tracing::{info, warn};

use moviestream_catalog::config::CatalogConfig;
use moviestream_catalog::router::build_router;
use moviestream_catalog::state::AppState;
use moviestream_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment.
    let dotenv_loaded = dotenv::dotenv().is_ok();
    init_tracing("info");
    if !dotenv_loaded {
        warn!("no .env file found, using process environment");
    }

    let config = CatalogConfig::from_env().expect("invalid catalog configuration");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");
    db.ping().await.expect("database did not answer ping");

    let state = AppState::new(db, &config);
    let router = build_router(state);

    let http_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!(
        recommended_movie_limit = config.recommended_movie_limit,
        storage_timeout_secs = config.storage_timeout_secs,
        "catalog service listening on {http_addr}"
    );
    axum::serve(listener, router).await.expect("server error");
}
