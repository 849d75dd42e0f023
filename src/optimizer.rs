//! Nearest-neighbor route optimizer.
//!
//! Greedy heuristic: repeatedly hop to the closest unvisited stop.
//! O(n²) in the stop count, which is fine for delivery batches of tens
//! of stops. No 2-opt pass and no exact TSP; callers rely on the
//! reproducible order this produces for a fixed input.

use tracing::trace;

use crate::error::RouteError;
use crate::haversine::{distance_km, round2};
use crate::types::{Coordinate, OptimizedRoute, Stop};

/// Order stops with the nearest-neighbor heuristic.
///
/// When `start` is given it seeds the courier position; its hop to the
/// first selected stop counts toward the total but the start itself does
/// not appear in the output. Without `start`, the first input stop
/// anchors the route as given.
///
/// Ties break toward the earlier input stop, so the result is
/// deterministic for a fixed input order. Empty input yields an empty
/// route; a lone stop comes back unchanged with zero distance.
pub fn optimize(stops: &[Stop], start: Option<Coordinate>) -> Result<OptimizedRoute, RouteError> {
    if let Some(origin) = start {
        origin.validate().map_err(|err| prefix_error("start", err))?;
    }
    for (index, stop) in stops.iter().enumerate() {
        stop.coordinate
            .validate()
            .map_err(|err| prefix_error(&format!("stop {index}"), err))?;
    }

    if stops.is_empty() {
        return Ok(OptimizedRoute {
            stops: Vec::new(),
            total_distance_km: 0.0,
            stop_count: 0,
        });
    }

    let mut remaining: Vec<&Stop> = stops.iter().collect();
    let mut ordered: Vec<Stop> = Vec::with_capacity(stops.len());
    let mut total_km = 0.0;

    let mut position = match start {
        Some(origin) => origin,
        None => {
            let first = remaining.remove(0);
            ordered.push(first.clone());
            first.coordinate
        }
    };

    while !remaining.is_empty() {
        let mut best = 0;
        let mut best_km = distance_km(position, remaining[0].coordinate);
        for (candidate, stop) in remaining.iter().enumerate().skip(1) {
            let km = distance_km(position, stop.coordinate);
            if km < best_km {
                best = candidate;
                best_km = km;
            }
        }

        let next = remaining.remove(best);
        trace!(hop_km = best_km, remaining = remaining.len(), "selected next stop");
        total_km += best_km;
        position = next.coordinate;
        ordered.push(next.clone());
    }

    Ok(OptimizedRoute {
        stop_count: ordered.len(),
        stops: ordered,
        total_distance_km: round2(total_km),
    })
}

fn prefix_error(context: &str, err: RouteError) -> RouteError {
    match err {
        RouteError::InvalidInput(msg) => RouteError::InvalidInput(format!("{context}: {msg}")),
        other => other,
    }
}
