//! Great-circle distance between coordinates.
//!
//! Straight-line estimate only; ignores the road network. Accurate
//! enough for sequencing delivery stops within a city.

use crate::types::Coordinate;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometers.
///
/// Deterministic and side-effect free; identical inputs yield 0.
/// Callers validate coordinates before reaching this point.
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Round to two decimals (half away from zero), the precision distances
/// are reported in.
pub(crate) fn round2(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = Coordinate::new(59.3293, 18.0686);
        assert!(distance_km(p, p) < 0.001, "same point should be ~0");
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinate::new(59.3293, 18.0686);
        let b = Coordinate::new(59.8586, 17.6389);
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance() {
        // Stockholm to Gothenburg, ~400 km as the crow flies
        let stockholm = Coordinate::new(59.3293, 18.0686);
        let gothenburg = Coordinate::new(57.7089, 11.9746);
        let dist = distance_km(stockholm, gothenburg);
        assert!(
            dist > 390.0 && dist < 410.0,
            "Stockholm to Gothenburg should be ~400km, got {}",
            dist
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(1.006), 1.01);
        // .125 is exact in binary, so the half-way case is observable
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(399.99999), 400.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
