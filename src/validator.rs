use serde_json::Value;

use crate::error::RideError;
use crate::models::ride::{RideFields, RidePayload};

/// Checks a candidate ride payload against the domain constraints, in fixed
/// order with the first failure winning. Pure; no side effects.
pub fn validate(payload: &RidePayload) -> Result<RideFields, RideError> {
    let start_lat = as_coordinate(&payload.start_lat);
    let start_long = as_coordinate(&payload.start_long);
    let end_lat = as_coordinate(&payload.end_lat);
    let end_long = as_coordinate(&payload.end_long);

    // NaN fails the range checks, so non-numeric input is rejected here.
    if !(-90.0..=90.0).contains(&start_lat) || !(-180.0..=180.0).contains(&start_long) {
        return Err(RideError::Validation(
            "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively".to_string(),
        ));
    }

    if !(-90.0..=90.0).contains(&end_lat) || !(-180.0..=180.0).contains(&end_long) {
        return Err(RideError::Validation(
            "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively".to_string(),
        ));
    }

    let rider_name = as_name(&payload.rider_name).ok_or_else(|| {
        RideError::Validation("Rider name must be a non empty string".to_string())
    })?;

    let driver_name = as_name(&payload.driver_name).ok_or_else(|| {
        RideError::Validation("Driver name must be a non empty string".to_string())
    })?;

    let driver_vehicle = as_name(&payload.driver_vehicle).ok_or_else(|| {
        RideError::Validation("Driver Vehicle must be a non empty string".to_string())
    })?;

    Ok(RideFields {
        start_lat,
        start_long,
        end_lat,
        end_long,
        rider_name: rider_name.to_string(),
        driver_name: driver_name.to_string(),
        driver_vehicle: driver_vehicle.to_string(),
    })
}

/// Coerces a wire value to a coordinate. Numbers pass through, numeric
/// strings parse, everything else becomes NaN.
fn as_coordinate(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// A name field must be a string with at least one non-whitespace character.
fn as_name(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> RidePayload {
        RidePayload {
            start_lat: json!(55),
            start_long: json!(66),
            end_lat: json!(77),
            end_long: json!(88),
            rider_name: json!("Mary Magic"),
            driver_name: json!("Howard"),
            driver_vehicle: json!("Volks Wagon"),
        }
    }

    #[test]
    fn accepts_valid_payload() {
        let fields = validate(&valid_payload()).unwrap();
        assert_eq!(fields.start_lat, 55.0);
        assert_eq!(fields.end_long, 88.0);
        assert_eq!(fields.rider_name, "Mary Magic");
    }

    #[test]
    fn accepts_string_encoded_coordinates() {
        let mut payload = valid_payload();
        payload.start_lat = json!("-20.652494");
        payload.start_long = json!("+100.391404");
        let fields = validate(&payload).unwrap();
        assert_eq!(fields.start_lat, -20.652494);
        assert_eq!(fields.start_long, 100.391404);
    }

    #[test]
    fn rejects_start_coordinates_out_of_range() {
        let mut payload = valid_payload();
        payload.start_lat = json!(181);
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(
            err.to_string(),
            "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
        );
    }

    #[test]
    fn rejects_end_coordinates_out_of_range() {
        let mut payload = valid_payload();
        payload.end_long = json!(-180.5);
        let err = validate(&payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
        );
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let mut payload = valid_payload();
        payload.start_lat = json!("not a number");
        let err = validate(&payload).unwrap_err();
        assert!(err.to_string().starts_with("Start latitude"));

        let mut payload = valid_payload();
        payload.end_lat = Value::Null;
        let err = validate(&payload).unwrap_err();
        assert!(err.to_string().starts_with("End latitude"));
    }

    #[test]
    fn rejects_boundary_overshoot_but_accepts_boundary() {
        let mut payload = valid_payload();
        payload.start_lat = json!(90);
        payload.start_long = json!(-180);
        assert!(validate(&payload).is_ok());

        payload.start_lat = json!(90.0001);
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn rejects_empty_names_in_order() {
        let mut payload = valid_payload();
        payload.rider_name = json!("");
        assert_eq!(
            validate(&payload).unwrap_err().to_string(),
            "Rider name must be a non empty string"
        );

        let mut payload = valid_payload();
        payload.driver_name = json!("   ");
        assert_eq!(
            validate(&payload).unwrap_err().to_string(),
            "Driver name must be a non empty string"
        );

        let mut payload = valid_payload();
        payload.driver_vehicle = Value::Null;
        assert_eq!(
            validate(&payload).unwrap_err().to_string(),
            "Driver Vehicle must be a non empty string"
        );
    }

    #[test]
    fn coordinate_failures_win_over_name_failures() {
        let mut payload = valid_payload();
        payload.start_lat = json!(181);
        payload.rider_name = json!("");
        assert!(validate(&payload).unwrap_err().to_string().starts_with("Start latitude"));
    }

    #[test]
    fn non_string_names_are_rejected() {
        let mut payload = valid_payload();
        payload.rider_name = json!(42);
        assert_eq!(
            validate(&payload).unwrap_err().to_string(),
            "Rider name must be a non empty string"
        );
    }
}
