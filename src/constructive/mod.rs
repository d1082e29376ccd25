//! Constructive heuristics for building an initial visiting order.
//!
//! - [`nearest_neighbor`]: Greedy nearest-neighbor path, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
