//! Coach management microservice: a REST API over a single `coaches` table.
//!
//! Requests flow `routes` -> `service` -> `db`, each layer calling only the
//! one below it.

use std::sync::Arc;

use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod service;

use config::Config;
use db::SqliteCoachRepository;
use service::CoachService;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("invalid CORS origin: {0}")]
    Cors(#[from] axum::http::header::InvalidHeaderValue),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connect, migrate and serve until Ctrl-C.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let pool = db::connect(&config.database_url, config.max_connections).await?;
    db::migrate(&pool).await?;
    tracing::info!("Database connection established.");

    let service = CoachService::new(Arc::new(SqliteCoachRepository::new(pool)));

    let app = routes::create_router(service)
        .layer(routes::cors_layer(&config.cors_allowed_origin)?)
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("API endpoint: http://{}/api/coaches", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
