use std::time::Duration;

use rides_service::config::AppConfig;
use rides_service::db::{self, SqliteRideStore};
use rides_service::http;
use rides_service::service::RideService;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting Rides Service...");

    // Init DB
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    db::ensure_schema(&pool).await?;
    info!("Connected to database");

    // Wire the service and serve
    let store = SqliteRideStore::new(pool, Duration::from_secs(config.db_query_timeout_secs));
    let app = http::router(RideService::new(store));

    let listener = TcpListener::bind(&config.http_addr).await?;
    info!("Listening on {}", config.http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
