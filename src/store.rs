//! In-process store of each courier's active route.
//!
//! Routes live only for the lifetime of the process; a restart clears
//! them. Couriers hash onto independent lock shards, so progress updates
//! for one courier do not wait on another.

use std::collections::HashMap;

use jiff::Timestamp;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RouteError;
use crate::types::{OptimizedRoute, Stop};

/// Progress state of an active route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Active,
    Completed,
}

/// The route a courier is currently working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveRoute {
    pub courier_id: i64,
    /// Immutable once assigned; replacing them means assigning a new
    /// route.
    pub stops: Vec<Stop>,
    pub total_distance_km: f64,
    /// Always within `0..stops.len()`.
    pub current_stop_index: usize,
    pub status: RouteStatus,
    pub vehicle_type: String,
    pub created_at: Timestamp,
}

/// Store tuning knobs.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of lock shards the courier keyspace spreads over.
    pub shards: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { shards: 16 }
    }
}

/// Keyed, concurrency-safe storage of active routes.
///
/// Construct one store and share it by reference. Operations on the same
/// courier serialize on its shard lock; operations on different couriers
/// usually land on different shards and proceed in parallel. Nothing
/// here blocks on I/O.
pub struct ActiveRouteStore {
    shards: Vec<RwLock<HashMap<i64, ActiveRoute>>>,
}

impl Default for ActiveRouteStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl ActiveRouteStore {
    pub fn new(config: StoreConfig) -> Self {
        let shards = config.shards.max(1);
        Self {
            shards: (0..shards).map(|_| RwLock::new(HashMap::new())).collect(),
        }
    }

    fn shard(&self, courier_id: i64) -> &RwLock<HashMap<i64, ActiveRoute>> {
        let index = courier_id.rem_euclid(self.shards.len() as i64) as usize;
        &self.shards[index]
    }

    /// Assign a route to a courier, replacing any prior assignment
    /// outright.
    ///
    /// Progress starts at the first stop. Zero-stop routes are rejected;
    /// there is no stop for `current_stop_index` to point at.
    pub fn set_active_route(
        &self,
        courier_id: i64,
        route: &OptimizedRoute,
        vehicle_type: &str,
    ) -> Result<ActiveRoute, RouteError> {
        if route.stops.is_empty() {
            return Err(RouteError::InvalidInput(
                "cannot assign a route with no stops".to_string(),
            ));
        }

        let record = ActiveRoute {
            courier_id,
            stops: route.stops.clone(),
            total_distance_km: route.total_distance_km,
            current_stop_index: 0,
            status: RouteStatus::Active,
            vehicle_type: vehicle_type.to_string(),
            created_at: Timestamp::now(),
        };

        debug!(courier_id, stops = record.stops.len(), "assigned active route");
        self.shard(courier_id)
            .write()
            .insert(courier_id, record.clone());
        Ok(record)
    }

    /// Current route for a courier. Absence is a normal result, not an
    /// error.
    pub fn get_active_route(&self, courier_id: i64) -> Option<ActiveRoute> {
        self.shard(courier_id).read().get(&courier_id).cloned()
    }

    /// Move a courier to a new stop index.
    ///
    /// Reaching the final stop marks the route completed. The index may
    /// also move backward, which reopens a completed route.
    pub fn update_progress(
        &self,
        courier_id: i64,
        new_index: usize,
    ) -> Result<ActiveRoute, RouteError> {
        let shard = self.shard(courier_id);
        let mut routes = shard.write();
        let route = routes.get_mut(&courier_id).ok_or_else(|| {
            RouteError::NotFound(format!("no active route for courier {courier_id}"))
        })?;

        if new_index >= route.stops.len() {
            return Err(RouteError::InvalidInput(format!(
                "stop index {new_index} out of range for {} stops",
                route.stops.len()
            )));
        }

        route.current_stop_index = new_index;
        route.status = if new_index == route.stops.len() - 1 {
            RouteStatus::Completed
        } else {
            RouteStatus::Active
        };

        debug!(courier_id, new_index, status = ?route.status, "updated progress");
        Ok(route.clone())
    }

    /// Drop a courier's route. Returns whether one existed.
    pub fn clear_active_route(&self, courier_id: i64) -> bool {
        let removed = self
            .shard(courier_id)
            .write()
            .remove(&courier_id)
            .is_some();
        if removed {
            debug!(courier_id, "cleared active route");
        }
        removed
    }

    /// Number of couriers with an assigned route.
    pub fn active_count(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    /// Couriers that currently have a route, in no particular order.
    pub fn courier_ids(&self) -> Vec<i64> {
        self.shards
            .iter()
            .flat_map(|shard| shard.read().keys().copied().collect::<Vec<_>>())
            .collect()
    }
}
