//! # u-tour
//!
//! Tour route optimization for a single outing: given the stops a visitor
//! must reach, find a short visiting order, estimate the trip duration, and
//! produce a directions reference for an external mapping service.
//!
//! Distances are great-circle (haversine) kilometers, not road distances.
//! The search is an approximate open-path TSP: nearest-neighbor construction
//! plus 2-opt, repeated from every stop.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Stop, OptimizedRoute)
//! - [`distance`]: Haversine distance and distance matrix
//! - [`constructive`]: Nearest-neighbor construction
//! - [`local_search`]: 2-opt improvement
//! - [`evaluation`]: Distance, duration, maps reference, and improvement metrics
//! - [`optimizer`]: Multi-start and fixed-start entry points
//!
//! ## Example
//!
//! ```
//! use u_tour::models::Stop;
//! use u_tour::{calculate_improvement, optimize_route};
//!
//! let stops = vec![
//!     Stop::new("a", 37.4979, 127.0276),
//!     Stop::new("b", 37.5172, 127.0473),
//!     Stop::new("c", 37.5045, 127.0490),
//!     Stop::unlocated("d"),
//! ];
//!
//! let route = optimize_route(&stops);
//! assert_eq!(route.ordered_locations.len(), 3);
//! assert!(route.maps_url.starts_with("https://www.google.com/maps/dir/"));
//!
//! let pct = calculate_improvement(&stops, &route.ordered_locations);
//! assert!(pct >= 0.0);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod optimizer;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::OptimizerConfig;
pub use error::TourError;
pub use models::{OptimizedRoute, Stop};
pub use optimizer::{
    calculate_improvement, optimize_route, optimize_route_from_start, TourOptimizer,
};
