//! Multi-vehicle cheapest-arc constructive heuristic.
//!
//! # Algorithm
//!
//! Every vehicle starts at the depot. In each round, for every vehicle the
//! cheapest arc from its current route endpoint to any unassigned stop is
//! found; the globally cheapest of those arcs is committed by appending the
//! stop to that vehicle's route. When every stop is assigned, all routes
//! return to the depot.
//!
//! Ties are broken by lowest vehicle index, then lowest stop index, so the
//! output is a pure function of the input.
//!
//! # Complexity
//!
//! O(n × m) per round and O(n² × m) overall, where n = number of stops and
//! m = number of vehicles.

use tracing::{debug, trace};

use crate::distance::CostMatrix;
use crate::error::{Result, RoutingError};
use crate::models::{Route, Solution, DEPOT};

/// Builds one depot-anchored route per vehicle from a cost matrix.
///
/// # Examples
///
/// ```
/// use rover_routing::distance::CostMatrix;
/// use rover_routing::constructive::RouteBuilder;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 5.0],
///     vec![1.0, 0.0, 2.0],
///     vec![5.0, 2.0, 0.0],
/// ])
/// .unwrap();
///
/// let solution = RouteBuilder::new(&costs).build(&[1, 2], 2).unwrap();
/// assert_eq!(solution.routes()[0].nodes(), &[0, 1, 2, 0]);
/// assert_eq!(solution.routes()[1].nodes(), &[0, 0]);
/// ```
pub struct RouteBuilder<'a> {
    costs: &'a CostMatrix,
}

impl<'a> RouteBuilder<'a> {
    /// Creates a builder that measures arcs with `costs`.
    pub fn new(costs: &'a CostMatrix) -> Self {
        Self { costs }
    }

    /// Partitions `stops` across `vehicle_count` vehicles and orders each
    /// vehicle's visits.
    ///
    /// `stops` is treated as a set: duplicates collapse and the depot index
    /// is ignored. Vehicles that receive no stop keep the `[depot, depot]`
    /// route.
    ///
    /// # Errors
    ///
    /// * [`RoutingError::InvalidVehicleCount`] if `vehicle_count` is 0
    /// * [`RoutingError::OutOfRange`] if a stop is outside the matrix
    pub fn build(&self, stops: &[usize], vehicle_count: usize) -> Result<Solution> {
        if vehicle_count == 0 {
            return Err(RoutingError::InvalidVehicleCount {
                count: vehicle_count,
            });
        }
        self.costs.check_index(DEPOT)?;

        let mut pending: Vec<usize> = stops.iter().copied().filter(|&s| s != DEPOT).collect();
        pending.sort_unstable();
        pending.dedup();
        for &stop in &pending {
            self.costs.check_index(stop)?;
        }

        let mut tails = vec![DEPOT; vehicle_count];
        let mut sequences: Vec<Vec<usize>> = vec![Vec::new(); vehicle_count];

        while !pending.is_empty() {
            let mut best: Option<(f64, usize, usize)> = None;

            for (vehicle, &tail) in tails.iter().enumerate() {
                // `pending` is sorted, so the first minimum is the lowest stop.
                let Some((stop, cost)) = self.costs.nearest(tail, &pending) else {
                    continue;
                };
                if best.is_none_or(|(best_cost, _, _)| cost < best_cost) {
                    best = Some((cost, vehicle, stop));
                }
            }

            let Some((cost, vehicle, stop)) = best else {
                break;
            };

            pending.retain(|&s| s != stop);
            trace!(vehicle, stop, cost, "commit arc");
            sequences[vehicle].push(stop);
            tails[vehicle] = stop;
        }

        let routes: Vec<Route> = sequences
            .iter()
            .enumerate()
            .map(|(vehicle, seq)| Route::from_stops(vehicle, DEPOT, seq))
            .collect();

        debug!(
            vehicles = vehicle_count,
            stops = routes.iter().map(Route::len).sum::<usize>(),
            idle = routes.iter().filter(|r| r.is_empty()).count(),
            "cheapest-arc construction done"
        );

        Ok(Solution::new(routes))
    }
}

/// Shorthand for `RouteBuilder::new(costs).build(stops, vehicle_count)`.
pub fn cheapest_arc(costs: &CostMatrix, stops: &[usize], vehicle_count: usize) -> Result<Solution> {
    RouteBuilder::new(costs).build(stops, vehicle_count)
}
