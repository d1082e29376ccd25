//! Local search operators for improving a visiting order.
//!
//! - [`two_opt_improve`]: 2-opt segment reversal, first-improvement
//! - [`two_opt_step`]: a single improving reversal

mod two_opt;

pub use two_opt::{
    closed_tour_distance, path_distance, two_opt_improve, two_opt_step, IMPROVEMENT_EPS,
};
