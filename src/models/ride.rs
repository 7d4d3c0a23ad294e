use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A persisted ride row. Serializes with the column names of the `Rides`
/// table so API responses mirror the stored record.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    #[serde(rename = "rideID")]
    #[sqlx(rename = "rideID")]
    pub ride_id: i64,
    #[sqlx(rename = "startLat")]
    pub start_lat: f64,
    #[sqlx(rename = "startLong")]
    pub start_long: f64,
    #[sqlx(rename = "endLat")]
    pub end_lat: f64,
    #[sqlx(rename = "endLong")]
    pub end_long: f64,
    #[sqlx(rename = "riderName")]
    pub rider_name: String,
    #[sqlx(rename = "driverName")]
    pub driver_name: String,
    #[sqlx(rename = "driverVehicle")]
    pub driver_vehicle: String,
    pub created: NaiveDateTime,
}

/// Raw `POST /rides` body. Fields stay loosely typed (`Value`) so the
/// validator controls coercion: numeric strings are accepted for the
/// coordinates, anything non-numeric fails the bounds check instead of
/// being rejected by deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct RidePayload {
    #[serde(default)]
    pub start_lat: Value,
    #[serde(default)]
    pub start_long: Value,
    #[serde(default)]
    pub end_lat: Value,
    #[serde(default)]
    pub end_long: Value,
    #[serde(default)]
    pub rider_name: Value,
    #[serde(default)]
    pub driver_name: Value,
    #[serde(default)]
    pub driver_vehicle: Value,
}

/// Validated field tuple, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RideFields {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}
