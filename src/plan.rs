//! One-call route planning for assignment endpoints.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::eta::estimate_minutes;
use crate::instructions::{Instruction, build_instructions};
use crate::optimizer::optimize;
use crate::types::{Coordinate, OptimizedRoute, Stop};

/// An optimized route together with its travel estimate and instruction
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub route: OptimizedRoute,
    pub eta_minutes: i64,
    pub instructions: Vec<Instruction>,
}

/// Optimize a stop set and derive ETA and instructions in one call.
///
/// The pieces are also usable separately; this is the composition the
/// route-assignment endpoint performs.
pub fn plan_route(
    stops: &[Stop],
    start: Option<Coordinate>,
    vehicle_type: &str,
) -> Result<RoutePlan, RouteError> {
    let route = optimize(stops, start)?;
    let eta_minutes = estimate_minutes(route.total_distance_km, vehicle_type)?;
    let instructions = build_instructions(&route.stops);

    Ok(RoutePlan {
        route,
        eta_minutes,
        instructions,
    })
}
