use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::RideStore;
use crate::error::RideError;
use crate::models::ride::{Ride, RidePayload};
use crate::service::RideService;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub fn router<S: RideStore + 'static>(service: RideService<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rides", get(list_rides::<S>).post(create_ride::<S>))
        .route("/rides/{id}", get(get_ride::<S>))
        .with_state(Arc::new(service))
}

/// Liveness probe for infrastructure; plain text by contract.
async fn health() -> &'static str {
    "Healthy"
}

async fn create_ride<S: RideStore>(
    State(service): State<Arc<RideService<S>>>,
    Json(payload): Json<RidePayload>,
) -> Result<Json<Vec<Ride>>, RideError> {
    let rows = service.create(&payload).await?;
    Ok(Json(rows))
}

async fn list_rides<S: RideStore>(
    State(service): State<Arc<RideService<S>>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Ride>>, RideError> {
    let rows = service.list(query.page, query.limit).await?;
    Ok(Json(rows))
}

async fn get_ride<S: RideStore>(
    State(service): State<Arc<RideService<S>>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Ride>>, RideError> {
    let rows = service.get_by_id(id).await?;
    Ok(Json(rows))
}
