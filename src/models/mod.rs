//! Domain model types for depot-based fleet routing.
//!
//! Locations are referenced by their index in the location table (0 is the
//! depot). Routes are ordered node sequences anchored at the depot, and a
//! solution holds one route per vehicle.

mod location;
mod route;
mod solution;

pub use location::Location;
pub use route::Route;
pub use solution::{RouteStats, Solution};

/// Index of the depot in every location table and cost matrix.
pub const DEPOT: usize = 0;
