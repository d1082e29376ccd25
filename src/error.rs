//! Error types.

use thiserror::Error;

/// Errors from the checked optimizer entry points and the bindings.
///
/// The core operations never fail; they degrade gracefully on empty or
/// unlocated input. These errors cover caller contracts only.
#[derive(Debug, Error)]
pub enum TourError {
    /// More located stops than the configured cap.
    #[error("tour has {count} located stops, more than the limit of {max}")]
    TooManyStops {
        /// Located stops in the request.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A stop's coordinates lie outside the valid latitude/longitude range.
    #[error("stop {id:?} has out-of-range coordinates ({latitude}, {longitude})")]
    CoordinateOutOfRange {
        /// Offending stop ID.
        id: String,
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },

    /// The optimizer configuration is unusable.
    #[error("invalid optimizer config: {0}")]
    InvalidConfig(String),

    /// Malformed JSON at the C boundary.
    #[cfg(feature = "ffi")]
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for tour operations.
pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = TourError::TooManyStops { count: 80, max: 50 };
        assert_eq!(
            e.to_string(),
            "tour has 80 located stops, more than the limit of 50"
        );

        let e = TourError::CoordinateOutOfRange {
            id: "a".into(),
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(e.to_string().contains("\"a\""));
    }
}
