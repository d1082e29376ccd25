//! Dense distance matrix.

use crate::models::Stop;

use super::haversine_km;

/// A dense n×n distance matrix (kilometers) stored in row-major order.
///
/// Rows and columns are positions in a filtered stop list, not stop IDs.
///
/// # Examples
///
/// ```
/// use u_tour::models::Stop;
/// use u_tour::distance::DistanceMatrix;
///
/// let stops = vec![
///     Stop::new("a", 0.0, 0.0),
///     Stop::new("b", 0.0, 1.0),
///     Stop::new("c", 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert_eq!(dm.get(0, 2), dm.get(2, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a haversine matrix from `(latitude, longitude)` points.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(points[i], points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes a haversine matrix over the located stops.
    ///
    /// Unlocated stops are skipped, so indices refer to positions among the
    /// located stops. Callers normally filter first with
    /// [`located`](crate::models::located).
    pub fn from_stops(stops: &[Stop]) -> Self {
        let points: Vec<(f64, f64)> = stops.iter().filter_map(Stop::coordinates).collect();
        Self::from_points(&points)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Stop> {
        vec![
            Stop::new("a", 0.0, 0.0),
            Stop::new("b", 0.0, 1.0),
            Stop::new("c", 1.0, 0.0),
        ]
    }

    #[test]
    fn test_from_stops() {
        let dm = DistanceMatrix::from_stops(&triangle());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 111.19).abs() < 0.01);
        assert!((dm.get(0, 2) - 111.19).abs() < 0.01);
        for i in 0..3 {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_stops(&triangle());
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_from_stops_skips_unlocated() {
        let mut stops = triangle();
        stops.insert(1, Stop::unlocated("x"));
        let dm = DistanceMatrix::from_stops(&stops);
        assert_eq!(dm.size(), 3);
    }

    #[test]
    fn test_identical_points() {
        let dm = DistanceMatrix::from_points(&[(10.0, 20.0), (10.0, 20.0)]);
        assert_eq!(dm.get(0, 1), 0.0);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_stops(&[]);
        assert_eq!(dm.size(), 0);
    }
}
