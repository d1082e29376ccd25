//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// Assumed average urban driving speed.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

/// Time spent at each stop for parking, walking, and showing.
pub const DEFAULT_DWELL_MINUTES: u32 = 15;

/// Waypoint URL prefix for the external mapping service.
pub const DEFAULT_MAPS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// Default cap on located stops for the checked entry points.
pub const DEFAULT_MAX_STOPS: usize = 50;

/// Parameters for duration estimation, maps output, and input limits.
///
/// Deserializes from partial input; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use u_tour::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_average_speed_kmh(40.0)
///     .with_dwell_minutes(10)
///     .with_max_stops(None);
/// assert_eq!(config.dwell_minutes, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Average driving speed in km/h.
    pub average_speed_kmh: f64,
    /// Minutes spent at each stop.
    pub dwell_minutes: u32,
    /// Prefix for the generated maps reference.
    pub maps_base_url: String,
    /// Maximum located stops accepted by the checked entry points.
    pub max_stops: Option<usize>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            dwell_minutes: DEFAULT_DWELL_MINUTES,
            maps_base_url: DEFAULT_MAPS_BASE_URL.to_string(),
            max_stops: Some(DEFAULT_MAX_STOPS),
        }
    }
}

impl OptimizerConfig {
    /// Sets the average driving speed.
    pub fn with_average_speed_kmh(mut self, speed: f64) -> Self {
        self.average_speed_kmh = speed;
        self
    }

    /// Sets the per-stop dwell time.
    pub fn with_dwell_minutes(mut self, minutes: u32) -> Self {
        self.dwell_minutes = minutes;
        self
    }

    /// Sets the maps URL prefix.
    pub fn with_maps_base_url(mut self, url: impl Into<String>) -> Self {
        self.maps_base_url = url.into();
        self
    }

    /// Sets the stop cap; `None` disables it.
    pub fn with_max_stops(mut self, max: Option<usize>) -> Self {
        self.max_stops = max;
        self
    }

    /// Checks that the configuration can produce finite estimates.
    pub fn validate(&self) -> Result<()> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(TourError::InvalidConfig(format!(
                "average_speed_kmh must be positive and finite, got {}",
                self.average_speed_kmh
            )));
        }
        if self.max_stops == Some(0) {
            return Err(TourError::InvalidConfig(
                "max_stops must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = OptimizerConfig::default();
        assert_eq!(c.average_speed_kmh, 30.0);
        assert_eq!(c.dwell_minutes, 15);
        assert_eq!(c.max_stops, Some(50));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_invalid_speed() {
        for speed in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let c = OptimizerConfig::default().with_average_speed_kmh(speed);
            assert!(matches!(c.validate(), Err(TourError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_zero_cap_rejected() {
        let c = OptimizerConfig::default().with_max_stops(Some(0));
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_partial_deserialize() {
        let c: OptimizerConfig =
            serde_json::from_str(r#"{"dwell_minutes": 20}"#).expect("valid");
        assert_eq!(c.dwell_minutes, 20);
        assert_eq!(c.average_speed_kmh, 30.0);
        assert_eq!(c.maps_base_url, DEFAULT_MAPS_BASE_URL);
    }
}
