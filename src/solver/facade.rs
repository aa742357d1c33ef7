//! Solve entry points and the route report payload.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::constructive::RouteBuilder;
use crate::distance::CostMatrix;
use crate::error::{MatrixDefect, Result};
use crate::evaluation::route_stats;
use crate::local_search::{self, Deadline};
use crate::models::{Location, RouteStats, DEPOT};

/// Response payload of one solve call.
///
/// Field names match the JSON consumed by map front ends:
/// `{locations, routes, index_routes, route_stats}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    /// The full location table, depot first.
    pub locations: Vec<Location>,
    /// Coordinate sequence of every route, depot first and last.
    pub routes: Vec<Vec<Location>>,
    /// Node-index sequence of every route, depot first and last.
    pub index_routes: Vec<Vec<usize>>,
    /// Time and distance of every route, in route order.
    pub route_stats: Vec<RouteStats>,
}

/// Knobs for a single solve call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Run local search on the constructed solution.
    pub improve: bool,
    /// Budget for local search; ignored unless `improve` is set.
    pub deadline: Deadline,
}

impl SolveOptions {
    /// Construction followed by local search bounded by `deadline`.
    pub fn improved(deadline: Deadline) -> Self {
        Self {
            improve: true,
            deadline,
        }
    }
}

/// Builds routes against `times`, then reports each route's time and
/// distance.
///
/// Every non-depot location is a stop. Routes are built with the
/// cheapest-arc heuristic only; see [`solve_with`] to add local search.
///
/// # Errors
///
/// * [`RoutingError::MalformedMatrix`](crate::error::RoutingError::MalformedMatrix)
///   if a matrix does not cover exactly `locations.len()` locations
/// * [`RoutingError::InvalidVehicleCount`](crate::error::RoutingError::InvalidVehicleCount)
///   if `vehicle_count` is 0
///
/// # Examples
///
/// ```
/// use rover_routing::distance::CostMatrix;
/// use rover_routing::models::Location;
/// use rover_routing::solver::solve;
///
/// let locations = vec![
///     Location::new(40.7128, -74.0060),
///     Location::new(40.7306, -73.9352),
///     Location::new(40.7589, -73.9851),
/// ];
/// let times = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0],
///     vec![10.0, 0.0, 8.0],
///     vec![15.0, 8.0, 0.0],
/// ])
/// .unwrap();
/// let distances = CostMatrix::from_rows(vec![
///     vec![0.0, 15.0, 22.0],
///     vec![15.0, 0.0, 12.0],
///     vec![22.0, 12.0, 0.0],
/// ])
/// .unwrap();
///
/// let report = solve(&locations, &times, &distances, 2).unwrap();
/// assert_eq!(report.index_routes, vec![vec![0, 1, 2, 0], vec![0, 0]]);
/// assert_eq!(report.route_stats[0].time, 33.0);
/// assert_eq!(report.route_stats[0].distance, 49.0);
/// assert_eq!(report.routes[1], vec![locations[0], locations[0]]);
/// ```
pub fn solve(
    locations: &[Location],
    times: &CostMatrix,
    distances: &CostMatrix,
    vehicle_count: usize,
) -> Result<RouteReport> {
    solve_with(
        locations,
        times,
        distances,
        vehicle_count,
        &SolveOptions::default(),
    )
}

/// Like [`solve`], optionally followed by a deadline-bounded local search
/// over the constructed routes.
#[instrument(skip_all, fields(locations = locations.len(), vehicles = vehicle_count, improve = options.improve))]
pub fn solve_with(
    locations: &[Location],
    times: &CostMatrix,
    distances: &CostMatrix,
    vehicle_count: usize,
    options: &SolveOptions,
) -> Result<RouteReport> {
    for matrix in [times, distances] {
        if matrix.size() != locations.len() {
            return Err(MatrixDefect::DimensionMismatch {
                expected: locations.len(),
                actual: matrix.size(),
            }
            .into());
        }
    }

    let stops: Vec<usize> = (0..locations.len()).filter(|&i| i != DEPOT).collect();
    let mut solution = RouteBuilder::new(times).build(&stops, vehicle_count)?;
    if options.improve {
        solution = local_search::improve(&solution, times, &options.deadline)?;
    }

    let mut route_coords = Vec::with_capacity(solution.num_routes());
    let mut stats = Vec::with_capacity(solution.num_routes());
    for route in solution.routes() {
        stats.push(route_stats(route, times, distances)?);
        route_coords.push(route.nodes().iter().map(|&i| locations[i]).collect());
    }

    debug!(
        served = solution.num_served(),
        total_time = stats.iter().map(|s| s.time).sum::<f64>(),
        "solve done"
    );

    Ok(RouteReport {
        locations: locations.to_vec(),
        routes: route_coords,
        index_routes: solution.index_routes(),
        route_stats: stats,
    })
}
