//! Route costing.
//!
//! Sums consecutive leg costs of a route under any cost matrix.

mod evaluator;

pub use evaluator::{route_stats, RouteEvaluator};
