//! Solution and route statistics types.

use serde::{Deserialize, Serialize};

use super::{Route, DEPOT};

/// A complete assignment of stops to vehicles: one route per vehicle.
///
/// Built fresh for every solve call; never mutated afterwards. Improvement
/// stages produce a new `Solution` instead of editing this one.
///
/// # Examples
///
/// ```
/// use rover_routing::models::{Route, Solution};
///
/// let sol = Solution::new(vec![
///     Route::from_stops(0, 0, &[1, 2]),
///     Route::depot_only(1, 0),
/// ]);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 2);
/// assert!(sol.is_partition_of(&[2, 1]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Wraps routes, ordered by vehicle.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Returns the routes in vehicle order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (one per vehicle, idle ones included).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of stops served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Returns `true` if every stop in `stops` is visited exactly once and
    /// nothing else is visited.
    ///
    /// `stops` is read as a set, and the depot index is ignored.
    pub fn is_partition_of(&self, stops: &[usize]) -> bool {
        let mut expected: Vec<usize> = stops.iter().copied().filter(|&s| s != DEPOT).collect();
        expected.sort_unstable();
        expected.dedup();

        let mut visited: Vec<usize> = self
            .routes
            .iter()
            .flat_map(|r| r.stops().iter().copied())
            .collect();
        visited.sort_unstable();

        visited == expected
    }

    /// Node-index form of every route, depot anchors included.
    pub fn index_routes(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|r| r.nodes().to_vec()).collect()
    }
}

/// Aggregate cost of one route under a time matrix and a distance matrix.
///
/// Serialized as `{"time": .., "distance": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteStats {
    /// Summed travel time along the route.
    pub time: f64,
    /// Summed travel distance along the route.
    pub distance: f64,
}
