//! Distance, duration, and improvement metrics.

use crate::distance::haversine_km;
use crate::models::Stop;

/// Rounds to one decimal place.
///
/// ```
/// use u_tour::evaluation::round_to_tenth;
///
/// assert_eq!(round_to_tenth(12.345), 12.3);
/// assert_eq!(round_to_tenth(12.36), 12.4);
/// ```
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Estimated outing time in minutes.
///
/// Driving time at `speed_kmh` plus `dwell_minutes` per stop, rounded to the
/// nearest minute. `speed_kmh` must be positive and finite;
/// [`OptimizerConfig::validate`](crate::OptimizerConfig::validate) enforces
/// this for the optimizer.
///
/// ```
/// use u_tour::evaluation::estimate_duration;
///
/// // 15 km at 30 km/h = 30 min, plus 3 × 15 min dwell
/// assert_eq!(estimate_duration(15.0, 3, 30.0, 15), 75);
/// assert_eq!(estimate_duration(0.0, 0, 30.0, 15), 0);
/// ```
pub fn estimate_duration(
    distance_km: f64,
    stop_count: usize,
    speed_kmh: f64,
    dwell_minutes: u32,
) -> u32 {
    let driving = distance_km / speed_kmh * 60.0;
    let dwell = f64::from(dwell_minutes) * stop_count as f64;
    (driving + dwell).round().max(0.0) as u32
}

/// Sum of haversine distances between consecutive located stops, in the
/// order given. Unlocated stops are skipped.
pub fn sequential_distance(stops: &[Stop]) -> f64 {
    let points: Vec<(f64, f64)> = stops.iter().filter_map(Stop::coordinates).collect();
    points.windows(2).map(|w| haversine_km(w[0], w[1])).sum()
}

/// Percentage by which `optimized` is shorter than `original`, walking each
/// list in its given order. One decimal place.
///
/// Returns `0.0` when either list has fewer than two located stops, when the
/// original distance is zero, or when the optimized order is not shorter.
///
/// ```
/// use u_tour::models::Stop;
/// use u_tour::evaluation::improvement_percent;
///
/// let a = Stop::new("a", 0.0, 0.0);
/// let b = Stop::new("b", 0.0, 1.0);
/// let c = Stop::new("c", 0.0, 2.0);
///
/// // a → c → b covers 3° of longitude, a → b → c only 2°
/// let pct = improvement_percent(&[a.clone(), c.clone(), b.clone()], &[a, b, c]);
/// assert_eq!(pct, 33.3);
/// ```
pub fn improvement_percent(original: &[Stop], optimized: &[Stop]) -> f64 {
    let original_located = original.iter().filter(|s| s.is_located()).count();
    let optimized_located = optimized.iter().filter(|s| s.is_located()).count();
    if original_located < 2 || optimized_located < 2 {
        return 0.0;
    }

    let original_distance = sequential_distance(original);
    if original_distance == 0.0 {
        return 0.0;
    }

    let optimized_distance = sequential_distance(optimized);
    let pct = (original_distance - optimized_distance) / original_distance * 100.0;
    round_to_tenth(pct.max(0.0))
}
