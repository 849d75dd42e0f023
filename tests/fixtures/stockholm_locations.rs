//! Real Stockholm locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Restaurants double as pickup
//! points, street addresses as delivery points.

use courier_router::types::{Stop, StopKind};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    /// Build a delivery stop addressed at this location.
    pub fn stop(&self) -> Stop {
        Stop::new(self.lat, self.lng).address(self.name)
    }

    /// Build a stop of the given kind addressed at this location.
    pub fn stop_of_kind(&self, kind: StopKind) -> Stop {
        self.stop().kind(kind)
    }
}

// ============================================================================
// Restaurants (pickup points)
// ============================================================================

pub const RESTAURANTS: &[Location] = &[
    Location::new("Meatballs for the People", 59.3149237, 18.0809926),
    Location::new("Pelikan", 59.3124444, 18.0756389),
    Location::new("Tradition", 59.3168553, 18.0717132),
    Location::new("Hermans", 59.3186418, 18.0850265),
    Location::new("Urban Deli Nytorget", 59.3129011, 18.0784234),
    Location::new("Falafelbaren", 59.3170224, 18.0637917),
    Location::new("Omnipollos Hatt", 59.3190426, 18.0711787),
    Location::new("La Neta Bar", 59.3370911, 18.0593419),
    Location::new("Vete-Katten", 59.3342551, 18.0606483),
    Location::new("Sturehof", 59.3343986, 18.0737285),
];

// ============================================================================
// Residential addresses (delivery points)
// ============================================================================

pub const ADDRESSES: &[Location] = &[
    Location::new("Hornsgatan 45", 59.3174643, 18.0551414),
    Location::new("Folkungagatan 80", 59.3141172, 18.0838591),
    Location::new("Katarina Bangata 17", 59.3117501, 18.0796501),
    Location::new("Ringvagen 52", 59.3095812, 18.0704951),
    Location::new("Gotgatan 67", 59.3132909, 18.0729407),
    Location::new("Bondegatan 1", 59.3144722, 18.0759167),
    Location::new("Skanegatan 63", 59.3131476, 18.0822201),
    Location::new("Vasagatan 12", 59.3329438, 18.0564295),
    Location::new("Odengatan 41", 59.3444632, 18.0569874),
    Location::new("Karlavagen 58", 59.3414126, 18.0801293),
    Location::new("Birger Jarlsgatan 22", 59.3359577, 18.0733464),
    Location::new("Sveavagen 100", 59.3448077, 18.0554391),
];

/// A small batch spread across the city center (good for optimizer
/// tests).
pub fn delivery_batch(count: usize) -> Vec<Stop> {
    ADDRESSES.iter().take(count).map(Location::stop).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_stockholm_area() {
        for loc in RESTAURANTS.iter().chain(ADDRESSES) {
            assert!(
                loc.lat > 59.2 && loc.lat < 59.4,
                "{} lat out of range: {}",
                loc.name,
                loc.lat
            );
            assert!(
                loc.lng > 17.9 && loc.lng < 18.2,
                "{} lng out of range: {}",
                loc.name,
                loc.lng
            );
        }
    }
}
