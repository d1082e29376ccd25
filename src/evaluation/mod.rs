//! Route metrics and output formatting.
//!
//! - [`sequential_distance`] / [`round_to_tenth`]: distance reporting
//! - [`estimate_duration`]: driving time at a fixed speed plus per-stop dwell
//! - [`maps_url`]: waypoint reference for an external mapping service
//! - [`improvement_percent`]: how much shorter one order is than another

mod maps;
mod metrics;

pub use maps::maps_url;
pub use metrics::{estimate_duration, improvement_percent, round_to_tenth, sequential_distance};
