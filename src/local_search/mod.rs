//! Local search operators for improving a constructed solution.
//!
//! - [`two_opt_improve`] — Intra-route segment reversal (direction-aware)
//! - [`or_opt_improve`] — Intra-route segment relocation
//! - [`relocate_improve`] — Inter-route stop relocation
//! - [`improve`] — Runs all of the above until no move helps or the
//!   [`Deadline`] passes
//!
//! Every operator only applies strictly improving moves, so the result is
//! never worse than its input and always visits the same stops.

mod deadline;
mod or_opt;
mod relocate;
mod two_opt;

use tracing::{debug, warn};

use crate::distance::CostMatrix;
use crate::error::Result;
use crate::evaluation::RouteEvaluator;
use crate::models::{Route, Solution};

pub use deadline::Deadline;
pub use or_opt::or_opt_improve;
pub use relocate::relocate_improve;
pub use two_opt::two_opt_improve;

/// Moves must save more than this to be applied.
pub(crate) const IMPROVEMENT_EPS: f64 = 1e-9;

/// Computes the closed-tour cost: depot → route[0] → ... → route[n-1] → depot.
///
/// An empty sequence costs nothing.
pub fn route_cost(route: &[usize], depot: usize, costs: &CostMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };
    let mut cost = costs.get(depot, first);
    for w in route.windows(2) {
        cost += costs.get(w[0], w[1]);
    }
    cost + costs.get(last, depot)
}

/// Improves a completed solution with relocate, 2-opt and Or-opt.
///
/// The input is left untouched; a new solution with the same vehicles and
/// the same stops is returned. When `deadline` expires, the best solution
/// reached so far is returned, which is at worst the input itself.
///
/// # Errors
///
/// [`RoutingError::OutOfRange`](crate::error::RoutingError::OutOfRange) if
/// the solution references a location outside `costs`.
///
/// # Examples
///
/// ```
/// use rover_routing::constructive::cheapest_arc;
/// use rover_routing::distance::CostMatrix;
/// use rover_routing::evaluation::RouteEvaluator;
/// use rover_routing::local_search::{improve, Deadline};
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 25.0, 20.0],
///     vec![10.0, 0.0, 8.0, 18.0, 12.0],
///     vec![15.0, 8.0, 0.0, 10.0, 6.0],
///     vec![25.0, 18.0, 10.0, 0.0, 14.0],
///     vec![20.0, 12.0, 6.0, 14.0, 0.0],
/// ])
/// .unwrap();
///
/// let initial = cheapest_arc(&costs, &[1, 2, 3, 4], 2).unwrap();
/// let improved = improve(&initial, &costs, &Deadline::none()).unwrap();
///
/// let eval = RouteEvaluator::new(&costs);
/// assert!(eval.solution_cost(&improved).unwrap() <= eval.solution_cost(&initial).unwrap());
/// assert!(improved.is_partition_of(&[1, 2, 3, 4]));
/// ```
pub fn improve(solution: &Solution, costs: &CostMatrix, deadline: &Deadline) -> Result<Solution> {
    let initial_cost = RouteEvaluator::new(costs).solution_cost(solution)?;

    let routes = solution.routes();
    let Some(depot) = routes.first().map(Route::depot) else {
        return Ok(solution.clone());
    };
    let vehicles: Vec<usize> = routes.iter().map(Route::vehicle_id).collect();
    let mut sequences: Vec<Vec<usize>> = routes.iter().map(|r| r.stops().to_vec()).collect();

    let mut current_cost = initial_cost;
    let mut rounds = 0;
    loop {
        if deadline.expired() {
            warn!(rounds, "improvement stopped by deadline");
            break;
        }
        rounds += 1;

        relocate_improve(&mut sequences, depot, costs, deadline);
        for seq in sequences.iter_mut() {
            let (reversed, _) = two_opt_improve(seq, depot, costs, deadline);
            let (moved, _) = or_opt_improve(&reversed, depot, costs, deadline);
            *seq = moved;
        }

        let cost: f64 = sequences.iter().map(|s| route_cost(s, depot, costs)).sum();
        let gain = current_cost - cost;
        current_cost = cost;
        if gain <= IMPROVEMENT_EPS {
            break;
        }
    }

    debug!(
        rounds,
        before = initial_cost,
        after = current_cost,
        "local search done"
    );

    let routes = vehicles
        .into_iter()
        .zip(&sequences)
        .map(|(vehicle, seq)| Route::from_stops(vehicle, depot, seq))
        .collect();
    Ok(Solution::new(routes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::cheapest_arc;
    use crate::error::RoutingError;

    fn sample_times() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 25.0, 20.0],
            vec![10.0, 0.0, 8.0, 18.0, 12.0],
            vec![15.0, 8.0, 0.0, 10.0, 6.0],
            vec![25.0, 18.0, 10.0, 0.0, 14.0],
            vec![20.0, 12.0, 6.0, 14.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_route_cost() {
        let costs = sample_times();
        assert_eq!(route_cost(&[], 0, &costs), 0.0);
        assert!((route_cost(&[1], 0, &costs) - 20.0).abs() < 1e-10);
        assert!((route_cost(&[1, 2, 4, 3], 0, &costs) - 63.0).abs() < 1e-10);
    }

    #[test]
    fn test_improve_never_worsens() {
        let costs = sample_times();
        let eval = RouteEvaluator::new(&costs);
        let initial = cheapest_arc(&costs, &[1, 2, 3, 4], 2).expect("solvable");
        let improved = improve(&initial, &costs, &Deadline::none()).expect("in range");
        let before = eval.solution_cost(&initial).expect("in range");
        let after = eval.solution_cost(&improved).expect("in range");
        assert!(after <= before + 1e-10);
        assert!(improved.is_partition_of(&[1, 2, 3, 4]));
        assert_eq!(improved.num_routes(), 2);
    }

    #[test]
    fn test_improve_fixes_bad_order() {
        let costs = sample_times();
        let eval = RouteEvaluator::new(&costs);
        let bad = Solution::new(vec![
            Route::from_stops(0, 0, &[3, 1, 4, 2]),
            Route::depot_only(1, 0),
        ]);
        let improved = improve(&bad, &costs, &Deadline::none()).expect("in range");
        let before = eval.solution_cost(&bad).expect("in range");
        let after = eval.solution_cost(&improved).expect("in range");
        assert!(after < before);
        for route in improved.routes() {
            assert_eq!(route.nodes().first(), Some(&0));
            assert_eq!(route.nodes().last(), Some(&0));
        }
    }

    #[test]
    fn test_improve_keeps_vehicle_order() {
        let costs = sample_times();
        let initial = cheapest_arc(&costs, &[1, 2, 3, 4], 3).expect("solvable");
        let improved = improve(&initial, &costs, &Deadline::none()).expect("in range");
        let ids: Vec<usize> = improved.routes().iter().map(Route::vehicle_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_expired_deadline_returns_input() {
        let costs = sample_times();
        let bad = Solution::new(vec![
            Route::from_stops(0, 0, &[3, 1, 4, 2]),
            Route::depot_only(1, 0),
        ]);
        let expired = Deadline::after(std::time::Duration::ZERO);
        let improved = improve(&bad, &costs, &expired).expect("in range");
        assert_eq!(improved, bad);
    }

    #[test]
    fn test_improve_out_of_range() {
        let costs = sample_times();
        let sol = Solution::new(vec![Route::from_stops(0, 0, &[9])]);
        assert_eq!(
            improve(&sol, &costs, &Deadline::none()),
            Err(RoutingError::OutOfRange { index: 9, size: 5 })
        );
    }
}
