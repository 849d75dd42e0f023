//! Core data types for courier routing.
//!
//! These are plain values with serde derives; the serving layer owns the
//! actual wire encoding.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RouteError;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks latitude/longitude ranges.
    ///
    /// Out-of-range and non-finite values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), RouteError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(RouteError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(RouteError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// What happens at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Pickup,
    Delivery,
    #[default]
    Unspecified,
}

impl StopKind {
    /// Name shown to couriers. Unspecified stops read as deliveries.
    pub fn display_name(&self) -> &'static str {
        match self {
            StopKind::Pickup => "pickup",
            StopKind::Delivery | StopKind::Unspecified => "delivery",
        }
    }
}

/// A single stop on a courier route.
///
/// Stops are immutable values: the optimizer reorders them but never
/// rewrites their fields. Caller-supplied fields beyond the known ones
/// ride along in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: StopKind,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Stop {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinate: Coordinate::new(latitude, longitude),
            address: None,
            kind: StopKind::default(),
            extra: Map::new(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn kind(mut self, kind: StopKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Result of one optimization call. Never persisted by the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    /// Stops in visiting order.
    pub stops: Vec<Stop>,
    /// Sum of hop distances, rounded to two decimals.
    pub total_distance_km: f64,
    pub stop_count: usize,
}
