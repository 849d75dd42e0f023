//! Step-by-step instruction list for an ordered route.

use serde::{Deserialize, Serialize};

use crate::haversine::{distance_km, round2};
use crate::types::Stop;

/// Address shown when a stop carries none.
const UNKNOWN_ADDRESS: &str = "Unknown address";

/// One step of a courier-facing route walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// 1-based step number.
    pub step: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub action: String,
    /// Distance to the following stop in km; absent on the final stop,
    /// which is how consumers detect the end of the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_next: Option<f64>,
}

/// Expand an ordered stop list into sequential instructions.
///
/// Every step except the last carries the distance to the following
/// stop, rounded to two decimals. Empty input yields no steps.
pub fn build_instructions(stops: &[Stop]) -> Vec<Instruction> {
    stops
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            let distance_to_next = stops
                .get(index + 1)
                .map(|next| round2(distance_km(stop.coordinate, next.coordinate)));

            Instruction {
                step: index + 1,
                kind: stop.kind.display_name().to_string(),
                address: stop
                    .address
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
                latitude: stop.coordinate.latitude,
                longitude: stop.coordinate.longitude,
                action: if index == 0 { "Start at" } else { "Proceed to" }.to_string(),
                distance_to_next,
            }
        })
        .collect()
}
