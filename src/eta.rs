//! Travel-time estimation from distance and vehicle class.
//!
//! Fixed average urban speeds; pure travel time, no per-stop service
//! buffer.

use tracing::warn;

use crate::error::RouteError;

/// Average urban speeds in km/h.
const WALKING_SPEED_KMH: f64 = 5.0;
const BIKE_SPEED_KMH: f64 = 15.0;
const SCOOTER_SPEED_KMH: f64 = 25.0;
const CAR_SPEED_KMH: f64 = 30.0;

/// Assumed speed for a vehicle type in km/h.
///
/// Unknown vehicle types fall back to the bike speed rather than
/// erroring.
pub fn speed_kmh(vehicle_type: &str) -> f64 {
    match vehicle_type {
        "walking" => WALKING_SPEED_KMH,
        "bike" => BIKE_SPEED_KMH,
        "scooter" => SCOOTER_SPEED_KMH,
        "car" => CAR_SPEED_KMH,
        other => {
            warn!(vehicle_type = other, "unknown vehicle type, assuming bike speed");
            BIKE_SPEED_KMH
        }
    }
}

/// Estimated travel time in whole minutes, rounded to nearest.
pub fn estimate_minutes(distance_km: f64, vehicle_type: &str) -> Result<i64, RouteError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(RouteError::InvalidInput(format!(
            "distance must be a non-negative number, got {distance_km}"
        )));
    }

    let minutes = distance_km / speed_kmh(vehicle_type) * 60.0;
    Ok(minutes.round() as i64)
}
