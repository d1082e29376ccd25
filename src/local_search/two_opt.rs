//! 2-opt improvement of a visiting order.
//!
//! # Algorithm
//!
//! For positions `i` and `j` with `j >= i + 2`, compare the edges
//! `(r[i], r[i+1])` and `(r[j], r[(j+1) mod n])` against the edges obtained by
//! reversing `r[i+1..=j]`:
//!
//! ```text
//! delta = d(r[i], r[j]) + d(r[i+1], r[(j+1) mod n]) - d(r[i], r[i+1]) - d(r[j], r[(j+1) mod n])
//! ```
//!
//! If delta < -1e-10 (km), reverse the segment and restart the scan
//! (first-improvement). Savings at or below the threshold count as no
//! improvement. Stop when a full scan finds no improving reversal.
//!
//! The second edge wraps around to `r[0]` when `j = n - 1`, so candidate moves
//! are scored as if the path were a closed tour. Every accepted move strictly
//! shortens that closed tour, which bounds the number of moves. The open path
//! can still get longer through a wrapped move, so the shortest open path seen
//! along the way is what gets returned.
//!
//! Position 0 is never moved, so a route anchored at a start keeps it.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) typical for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

/// Minimum cost reduction (km) for a move to count as an improvement.
pub const IMPROVEMENT_EPS: f64 = 1e-10;

/// Applies 2-opt improvement to an open path of matrix indices.
///
/// Repeats [`two_opt_step`] until it finds no move and returns the state with
/// the shortest [`path_distance`] among the input and every intermediate
/// route, earliest on ties. The result is therefore never longer than the
/// input. `distances` must be symmetric (checked in debug builds).
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::local_search::{path_distance, two_opt_improve};
///
/// // Unit square corners: 0=(0,0) 1=(1,0) 2=(1,1) 3=(0,1)
/// let s = 2f64.sqrt();
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, s,   1.0,
///     1.0, 0.0, 1.0, s,
///     s,   1.0, 0.0, 1.0,
///     1.0, s,   1.0, 0.0,
/// ]).unwrap();
///
/// // 0 → 2 → 1 → 3 crosses itself
/// let improved = two_opt_improve(&[0, 2, 1, 3], &dm);
/// assert_eq!(improved, vec![0, 1, 2, 3]);
/// assert!(path_distance(&improved, &dm) < path_distance(&[0, 2, 1, 3], &dm));
/// ```
pub fn two_opt_improve(route: &[usize], distances: &DistanceMatrix) -> Vec<usize> {
    debug_assert!(
        distances.is_symmetric(1e-9),
        "2-opt requires a symmetric distance matrix"
    );
    if route.len() < 3 {
        return route.to_vec();
    }

    let mut current = route.to_vec();
    let mut best = current.clone();
    let mut best_distance = path_distance(&best, distances);

    while two_opt_step(&mut current, distances) {
        let distance = path_distance(&current, distances);
        if distance < best_distance {
            best.copy_from_slice(&current);
            best_distance = distance;
        }
    }

    best
}

/// Applies the first improving reversal in ascending `(i, j)` order.
///
/// Returns `false` and leaves `route` untouched when no move saves more than
/// [`IMPROVEMENT_EPS`] under the wrapped scoring, so each `true` strictly
/// lowers [`closed_tour_distance`].
pub fn two_opt_step(route: &mut [usize], distances: &DistanceMatrix) -> bool {
    let n = route.len();
    if n < 3 {
        return false;
    }

    for i in 0..n - 2 {
        for j in i + 2..n {
            if two_opt_delta(route, distances, i, j) < -IMPROVEMENT_EPS {
                route[i + 1..=j].reverse();
                return true;
            }
        }
    }
    false
}

/// Cost change from reversing `route[i+1..=j]`, scored with the wrapped edge.
fn two_opt_delta(route: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = route.len();
    let a = route[i];
    let b = route[i + 1];
    let c = route[j];
    let d = route[(j + 1) % n];

    let old_cost = distances.get(a, b) + distances.get(c, d);
    let new_cost = distances.get(a, c) + distances.get(b, d);

    new_cost - old_cost
}

/// Length of the route closed back to its start:
/// [`path_distance`] plus `route[n-1] → route[0]`.
pub fn closed_tour_distance(route: &[usize], distances: &DistanceMatrix) -> f64 {
    match (route.first(), route.last()) {
        (Some(&first), Some(&last)) if route.len() > 1 => {
            path_distance(route, distances) + distances.get(last, first)
        }
        _ => 0.0,
    }
}

/// Total length of an open path: `route[0] → route[1] → ... → route[n-1]`.
///
/// Zero for paths with fewer than two locations.
pub fn path_distance(route: &[usize], distances: &DistanceMatrix) -> f64 {
    route.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}
