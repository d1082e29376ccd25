//! Tour optimization: multi-start nearest-neighbor + 2-opt over a haversine
//! distance matrix, with duration and maps-link output.
//!
//! The free functions use [`OptimizerConfig::default`](crate::OptimizerConfig);
//! build a [`TourOptimizer`] to change speed, dwell time, or limits.

mod search;
mod tour;

pub use tour::TourOptimizer;

use crate::models::{OptimizedRoute, Stop};

/// Optimizes the visiting order of `stops` with the default configuration.
///
/// # Examples
///
/// ```
/// use u_tour::models::Stop;
/// use u_tour::optimize_route;
///
/// let r = optimize_route(&[]);
/// assert!(r.ordered_locations.is_empty());
/// assert_eq!(r.maps_url, "");
///
/// let r = optimize_route(&[Stop::new("a", 1.0, 2.0)]);
/// assert_eq!(r.estimated_duration, 15);
/// ```
pub fn optimize_route(stops: &[Stop]) -> OptimizedRoute {
    TourOptimizer::default().optimize_route(stops)
}

/// Optimizes the visiting order of `stops` starting at `start_id`, with the
/// default configuration.
pub fn optimize_route_from_start(stops: &[Stop], start_id: &str) -> OptimizedRoute {
    TourOptimizer::default().optimize_route_from_start(stops, start_id)
}

/// Percentage reduction in sequential distance from `original` to `optimized`.
pub fn calculate_improvement(original: &[Stop], optimized: &[Stop]) -> f64 {
    TourOptimizer::default().calculate_improvement(original, optimized)
}
