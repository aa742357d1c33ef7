//! Route evaluator that sums edge costs along routes.

use crate::distance::CostMatrix;
use crate::error::Result;
use crate::models::{Route, RouteStats, Solution};

/// Scores routes against a cost matrix.
///
/// The matrix does not have to be the one the routes were built with:
/// routes built from travel times can be scored against distances without
/// touching their order.
///
/// # Examples
///
/// ```
/// use rover_routing::distance::CostMatrix;
/// use rover_routing::evaluation::RouteEvaluator;
/// use rover_routing::models::Route;
///
/// let distances = CostMatrix::from_rows(vec![
///     vec![0.0, 15.0, 22.0],
///     vec![15.0, 0.0, 12.0],
///     vec![22.0, 12.0, 0.0],
/// ])
/// .unwrap();
///
/// let evaluator = RouteEvaluator::new(&distances);
/// let route = Route::from_stops(0, 0, &[1, 2]);
/// assert_eq!(evaluator.evaluate(&route).unwrap(), 49.0);
/// assert_eq!(evaluator.evaluate(&Route::depot_only(1, 0)).unwrap(), 0.0);
/// ```
pub struct RouteEvaluator<'a> {
    costs: &'a CostMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over the given matrix.
    pub fn new(costs: &'a CostMatrix) -> Self {
        Self { costs }
    }

    /// Total cost of a route: the sum of every consecutive leg.
    ///
    /// Fails with [`RoutingError::OutOfRange`](crate::error::RoutingError::OutOfRange)
    /// if the route references a location the matrix does not cover.
    pub fn evaluate(&self, route: &Route) -> Result<f64> {
        self.evaluate_nodes(route.nodes())
    }

    /// Total cost of a raw node sequence. Sequences shorter than two nodes
    /// cost nothing.
    pub fn evaluate_nodes(&self, nodes: &[usize]) -> Result<f64> {
        let mut total = 0.0;
        for leg in nodes.windows(2) {
            total += self.costs.cost(leg[0], leg[1])?;
        }
        Ok(total)
    }

    /// Sum of route costs across a solution.
    pub fn solution_cost(&self, solution: &Solution) -> Result<f64> {
        let mut total = 0.0;
        for route in solution.routes() {
            total += self.evaluate(route)?;
        }
        Ok(total)
    }
}

/// Scores one route under a time matrix and a distance matrix.
pub fn route_stats(route: &Route, times: &CostMatrix, distances: &CostMatrix) -> Result<RouteStats> {
    Ok(RouteStats {
        time: RouteEvaluator::new(times).evaluate(route)?,
        distance: RouteEvaluator::new(distances).evaluate(route)?,
    })
}
