//! Nearest-neighbor constructive heuristic.
//!
//! Builds an open path greedily: starting from a given location, always move
//! to the nearest unvisited location.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use crate::distance::DistanceMatrix;

/// Constructs a visiting order with the nearest-neighbor heuristic.
///
/// Returns a permutation of `0..n` beginning at `start`. Ties go to the
/// lowest index, so the result is deterministic.
///
/// Returns an empty route for an empty matrix.
///
/// # Panics
///
/// Panics if `start` is out of bounds for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::nearest_neighbor;
///
/// // Four points on a line at 0, 1, 2, 3
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 2.0, 3.0,
///     1.0, 0.0, 1.0, 2.0,
///     2.0, 1.0, 0.0, 1.0,
///     3.0, 2.0, 1.0, 0.0,
/// ]).unwrap();
///
/// assert_eq!(nearest_neighbor(&dm, 0), vec![0, 1, 2, 3]);
/// assert_eq!(nearest_neighbor(&dm, 2), vec![2, 1, 0, 3]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    visited[start] = true;
    route.push(start);

    let mut current = start;
    while route.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for (i, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = distances.get(current, i);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                route.push(next);
                current = next;
            }
            None => break,
        }
    }

    route
}
