//! Domain model types for tour optimization.
//!
//! A tour is a set of [`Stop`]s visited in one outing; the optimizer returns
//! an [`OptimizedRoute`] with the visiting order and derived metrics.

mod optimized_route;
mod stop;

pub use optimized_route::OptimizedRoute;
pub use stop::{located, Stop};
