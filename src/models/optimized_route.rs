//! Optimizer output.

use serde::{Deserialize, Serialize};

use super::Stop;

/// The result of optimizing a tour.
///
/// Serialized with camelCase keys (`orderedLocations`, `totalDistance`,
/// `estimatedDuration`, `mapsUrl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    /// Located input stops in visiting order.
    pub ordered_locations: Vec<Stop>,
    /// Open-path length in kilometers, rounded to one decimal place.
    pub total_distance: f64,
    /// Estimated outing time in minutes (driving plus dwell).
    pub estimated_duration: u32,
    /// Waypoint reference for an external mapping service.
    pub maps_url: String,
}

impl OptimizedRoute {
    /// The result for a tour with no located stops.
    pub fn empty() -> Self {
        Self {
            ordered_locations: Vec::new(),
            total_distance: 0.0,
            estimated_duration: 0,
            maps_url: String::new(),
        }
    }

    /// Number of stops in the route.
    pub fn len(&self) -> usize {
        self.ordered_locations.len()
    }

    /// Returns `true` if the route visits no stops.
    pub fn is_empty(&self) -> bool {
        self.ordered_locations.is_empty()
    }

    /// Stop IDs in visiting order.
    pub fn stop_ids(&self) -> Vec<&str> {
        self.ordered_locations.iter().map(|s| s.id()).collect()
    }
}

impl Default for OptimizedRoute {
    fn default() -> Self {
        Self::empty()
    }
}
