use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tokio::time::timeout;
use tracing::warn;

use crate::error::RideError;
use crate::models::ride::{Ride, RideFields};

pub mod queries;

pub type DbPool = Pool<Sqlite>;

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Idempotent schema bootstrap, run once at startup.
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(queries::CREATE_RIDES_TABLE).execute(pool).await?;
    Ok(())
}

/// Narrow persistence seam for ride records. The service is constructed
/// over this trait, never over a concrete pool.
#[async_trait]
pub trait RideStore: Send + Sync {
    /// Inserts one ride and returns the engine-assigned row id.
    async fn insert(&self, fields: &RideFields) -> Result<i64, RideError>;

    /// Fetches the rides matching an id (normally zero or one).
    async fn fetch_by_id(&self, id: i64) -> Result<Vec<Ride>, RideError>;

    /// Fetches a window of rides in insertion order.
    async fn fetch_page(&self, limit: i64, offset: i64) -> Result<Vec<Ride>, RideError>;
}

/// SQLite-backed store. Every call is bounded by `query_timeout`; timeouts
/// and engine errors are logged here and surface only as `RideError::Server`.
#[derive(Clone)]
pub struct SqliteRideStore {
    pool: DbPool,
    query_timeout: Duration,
}

impl SqliteRideStore {
    pub fn new(pool: DbPool, query_timeout: Duration) -> Self {
        Self { pool, query_timeout }
    }

    async fn bounded<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, sqlx::Error>> + Send,
    ) -> Result<T, RideError> {
        match timeout(self.query_timeout, fut).await {
            Ok(result) => result.map_err(RideError::from),
            Err(_) => {
                warn!("Database query timed out after {:?}", self.query_timeout);
                Err(RideError::Server)
            }
        }
    }
}

#[async_trait]
impl RideStore for SqliteRideStore {
    async fn insert(&self, fields: &RideFields) -> Result<i64, RideError> {
        let result = self
            .bounded(
                sqlx::query(queries::INSERT_RIDE)
                    .bind(fields.start_lat)
                    .bind(fields.start_long)
                    .bind(fields.end_lat)
                    .bind(fields.end_long)
                    .bind(&fields.rider_name)
                    .bind(&fields.driver_name)
                    .bind(&fields.driver_vehicle)
                    .execute(&self.pool),
            )
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Vec<Ride>, RideError> {
        self.bounded(
            sqlx::query_as::<_, Ride>(queries::SELECT_RIDE_BY_ID)
                .bind(id)
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn fetch_page(&self, limit: i64, offset: i64) -> Result<Vec<Ride>, RideError> {
        self.bounded(
            sqlx::query_as::<_, Ride>(queries::SELECT_RIDES_PAGE)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool),
        )
        .await
    }
}
