//! Tour optimizer entry points.

use tracing::debug;

use crate::config::OptimizerConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::evaluation::{estimate_duration, improvement_percent, maps_url, round_to_tenth};
use crate::models::{located, OptimizedRoute, Stop};

use super::search::{anchored_search, multi_start_search, SearchResult};

/// Orders the stops of a single outing to keep total travel short.
///
/// Holds only its configuration; every call builds its own distance matrix
/// and working routes, so one optimizer can be shared across threads.
///
/// # Examples
///
/// ```
/// use u_tour::models::Stop;
/// use u_tour::{OptimizerConfig, TourOptimizer};
///
/// let optimizer = TourOptimizer::new(OptimizerConfig::default())?;
/// let stops = vec![
///     Stop::new("far", 0.0, 0.03),
///     Stop::new("near", 0.0, 0.01),
///     Stop::new("home", 0.0, 0.0),
///     Stop::unlocated("tbd"),
/// ];
///
/// let result = optimizer.optimize_route_from_start(&stops, "home");
/// assert_eq!(result.stop_ids(), vec!["home", "near", "far"]);
/// assert_eq!(result.total_distance, 3.3);
/// # Ok::<(), u_tour::TourError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourOptimizer {
    config: OptimizerConfig,
}

impl TourOptimizer {
    /// Creates an optimizer with the given configuration.
    ///
    /// Fails with [`TourError::InvalidConfig`] if the configuration cannot
    /// produce finite estimates, so every optimizer that exists is usable.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Finds a short visiting order over all located stops.
    ///
    /// Unlocated stops are dropped. Runs nearest-neighbor + 2-opt from every
    /// stop and keeps the shortest result (first found on ties).
    pub fn optimize_route(&self, stops: &[Stop]) -> OptimizedRoute {
        let stops = located(stops);
        debug!(event = "optimize_start", located = stops.len(), mode = "multi_start");

        match stops.len() {
            0 => OptimizedRoute::empty(),
            1 => self.single(stops),
            _ => {
                let distances = DistanceMatrix::from_stops(&stops);
                let best = multi_start_search(&distances);
                self.finish(&stops, best)
            }
        }
    }

    /// Like [`optimize_route`](Self::optimize_route) but the route must begin
    /// at the stop with ID `start_id`.
    ///
    /// If no located stop has that ID, falls back to the multi-start search.
    pub fn optimize_route_from_start(&self, stops: &[Stop], start_id: &str) -> OptimizedRoute {
        let stops = located(stops);
        let Some(start) = stops.iter().position(|s| s.id() == start_id) else {
            debug!(
                event = "start_not_found",
                start_id,
                "falling back to multi-start search"
            );
            return self.optimize_route(&stops);
        };
        debug!(event = "optimize_start", located = stops.len(), mode = "fixed_start", start_id);

        if stops.len() == 1 {
            return self.single(stops);
        }

        let distances = DistanceMatrix::from_stops(&stops);
        let result = anchored_search(&distances, start);
        self.finish(&stops, result)
    }

    /// Percentage by which `optimized` is shorter than `original`, comparing
    /// the consecutive distances of each list in its given order.
    ///
    /// Returns `0.0` for lists with fewer than two located stops, a zero
    /// original distance, or an optimized order that is not shorter.
    pub fn calculate_improvement(&self, original: &[Stop], optimized: &[Stop]) -> f64 {
        improvement_percent(original, optimized)
    }

    /// [`optimize_route`](Self::optimize_route) after checking coordinate
    /// ranges and the stop cap.
    pub fn try_optimize_route(&self, stops: &[Stop]) -> Result<OptimizedRoute> {
        self.check(stops)?;
        Ok(self.optimize_route(stops))
    }

    /// [`optimize_route_from_start`](Self::optimize_route_from_start) with the
    /// same checks as [`try_optimize_route`](Self::try_optimize_route).
    pub fn try_optimize_route_from_start(
        &self,
        stops: &[Stop],
        start_id: &str,
    ) -> Result<OptimizedRoute> {
        self.check(stops)?;
        Ok(self.optimize_route_from_start(stops, start_id))
    }

    fn check(&self, stops: &[Stop]) -> Result<()> {
        if let Some(bad) = stops.iter().find(|s| !s.is_in_range()) {
            let (latitude, longitude) = bad.coordinates().unwrap_or((f64::NAN, f64::NAN));
            return Err(TourError::CoordinateOutOfRange {
                id: bad.id().to_string(),
                latitude,
                longitude,
            });
        }

        let count = stops.iter().filter(|s| s.is_located()).count();
        if let Some(max) = self.config.max_stops {
            if count > max {
                return Err(TourError::TooManyStops { count, max });
            }
        }
        Ok(())
    }

    fn single(&self, stops: Vec<Stop>) -> OptimizedRoute {
        let maps_url = maps_url(&stops, &self.config.maps_base_url);
        OptimizedRoute {
            estimated_duration: self.duration(0.0, stops.len()),
            ordered_locations: stops,
            total_distance: 0.0,
            maps_url,
        }
    }

    fn finish(&self, stops: &[Stop], result: SearchResult) -> OptimizedRoute {
        let ordered: Vec<Stop> = result.route.iter().map(|&i| stops[i].clone()).collect();
        let estimated_duration = self.duration(result.distance, ordered.len());
        let maps_url = maps_url(&ordered, &self.config.maps_base_url);

        debug!(
            event = "optimize_end",
            stops = ordered.len(),
            distance_km = result.distance,
            duration_min = estimated_duration,
        );

        OptimizedRoute {
            ordered_locations: ordered,
            total_distance: round_to_tenth(result.distance),
            estimated_duration,
            maps_url,
        }
    }

    fn duration(&self, distance_km: f64, stop_count: usize) -> u32 {
        estimate_duration(
            distance_km,
            stop_count,
            self.config.average_speed_kmh,
            self.config.dwell_minutes,
        )
    }
}
