//! Runs the docket HTTP server.
//!
//! Usage:
//!
//! ```text
//! docket_server
//! ```
//!
//! Configuration comes from the environment (see [`docket::config`]). When
//! `DATABASE_URL` is set the `tasks` table is created if missing and tasks
//! are stored in `PostgreSQL`; otherwise they are kept in memory.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use docket::api::{create_router, with_static_files};
use docket::config::AppConfig;
use docket::task::{
    adapters::{
        memory::InMemoryTaskRepository,
        postgres::{PostgresTaskRepository, TaskPgPool},
    },
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use docket::telemetry::init_tracing;
use mockable::DefaultClock;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing()?;
    let config = AppConfig::from_env()?;

    let repository = build_repository(&config).await?;
    let service = TaskLifecycleService::new(repository, Arc::new(DefaultClock));

    let mut router = create_router(service);
    if let Some(dir) = config.static_dir.as_deref() {
        info!(dir = %dir.display(), "serving static files");
        router = with_static_files(router, dir);
    }
    let app = router.layer(TraceLayer::new_for_http());

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(%address, "docket listening");
    info!("  POST /api/tasks       - create a task");
    info!("  GET  /api/tasks/{{id}}  - fetch a task");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("docket stopped");
    Ok(())
}

async fn build_repository(config: &AppConfig) -> Result<Arc<dyn TaskRepository>, BoxError> {
    let Some(url) = config.database_url.clone() else {
        warn!("DATABASE_URL is not set; tasks are kept in memory and lost on exit");
        return Ok(Arc::new(InMemoryTaskRepository::new()));
    };

    let pool_size = config.pool_size;
    let pool: TaskPgPool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(pool_size)
            .build(ConnectionManager::<PgConnection>::new(url))
    })
    .await??;

    let repository = PostgresTaskRepository::new(pool);
    repository.ensure_schema().await?;
    info!(pool_size, "using PostgreSQL task store");
    Ok(Arc::new(repository))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "failed to install shutdown signal handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
