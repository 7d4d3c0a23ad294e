use crate::db::RideStore;
use crate::error::RideError;
use crate::models::ride::{Ride, RidePayload};
use crate::validator;

pub const DEFAULT_PAGE_LIMIT: i64 = 5;

/// Orchestrates validation and persistence. The store is injected at
/// construction; the service holds no other state.
pub struct RideService<S> {
    store: S,
}

impl<S: RideStore> RideService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates the payload, inserts it, and reads the new row back by its
    /// generated id. An insert that yields no readable row is a storage
    /// fault, not a missing record.
    pub async fn create(&self, payload: &RidePayload) -> Result<Vec<Ride>, RideError> {
        let fields = validator::validate(payload)?;
        let id = self.store.insert(&fields).await?;
        let rows = self.store.fetch_by_id(id).await?;
        if rows.is_empty() {
            return Err(RideError::Server);
        }
        Ok(rows)
    }

    /// Returns one page of rides. `page` falls back to 1 when absent or
    /// below 1, `limit` to 5 when absent. An empty page is reported as
    /// not-found rather than an empty success.
    pub async fn list(&self, page: Option<i64>, limit: Option<i64>) -> Result<Vec<Ride>, RideError> {
        let page = page.filter(|p| *p >= 1).unwrap_or(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        // Query params are unbounded; a saturated offset lands past the last
        // row and falls through to not-found like any other empty page.
        let offset = (page - 1).saturating_mul(limit);
        let rows = self.store.fetch_page(limit, offset).await?;
        if rows.is_empty() {
            return Err(RideError::NotFound);
        }
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Vec<Ride>, RideError> {
        let rows = self.store.fetch_by_id(id).await?;
        if rows.is_empty() {
            return Err(RideError::NotFound);
        }
        Ok(rows)
    }
}
