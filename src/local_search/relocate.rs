//! Inter-route stop relocation operator.
//!
//! # Algorithm
//!
//! Tries moving each stop from its current route to the best insertion
//! position in another route, idle routes included. The best improving move
//! over all route pairs is applied; this repeats until no move reduces the
//! total cost or the deadline passes.
//!
//! # Complexity
//!
//! O(n² × R) per pass where n = stops per route, R = number of routes.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::CostMatrix;

use super::{Deadline, IMPROVEMENT_EPS};

/// A relocate move: move a stop from one route to another.
#[derive(Debug, Clone)]
struct RelocateMove {
    from_route: usize,
    from_pos: usize,
    to_route: usize,
    to_pos: usize,
    delta: f64,
}

/// Applies inter-route relocate improvement to a set of stop sequences
/// (one per vehicle, depot excluded), in place.
///
/// Returns the number of moves applied.
///
/// # Examples
///
/// ```
/// use rover_routing::distance::CostMatrix;
/// use rover_routing::local_search::{relocate_improve, Deadline};
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 5.0, 6.0],
///     vec![1.0, 0.0, 50.0, 50.0],
///     vec![5.0, 2.0, 0.0, 2.0],
///     vec![6.0, 3.0, 2.0, 0.0],
/// ])
/// .unwrap();
///
/// // Stop 3 is stranded behind an expensive arc on the first route.
/// let mut routes = vec![vec![1, 3], vec![2]];
/// let moves = relocate_improve(&mut routes, 0, &costs, &Deadline::none());
/// assert_eq!(moves, 2);
/// assert_eq!(routes, vec![vec![], vec![3, 2, 1]]);
/// ```
pub fn relocate_improve(
    routes: &mut [Vec<usize>],
    depot: usize,
    costs: &CostMatrix,
    deadline: &Deadline,
) -> usize {
    if routes.len() < 2 {
        return 0;
    }

    let mut moves = 0;
    while !deadline.expired() {
        let Some(mv) = find_best_relocate(routes, depot, costs) else {
            break;
        };
        let stop = routes[mv.from_route].remove(mv.from_pos);
        routes[mv.to_route].insert(mv.to_pos, stop);
        moves += 1;
    }
    moves
}

/// Finds the best improving relocate move across all route pairs.
fn find_best_relocate(routes: &[Vec<usize>], depot: usize, costs: &CostMatrix) -> Option<RelocateMove> {
    let mut best: Option<RelocateMove> = None;

    for (from_r, from_route) in routes.iter().enumerate() {
        for from_pos in 0..from_route.len() {
            let stop = from_route[from_pos];
            let removal_delta = removal_cost(from_route, from_pos, depot, costs);

            for (to_r, to_route) in routes.iter().enumerate() {
                if to_r == from_r {
                    continue;
                }

                for to_pos in 0..=to_route.len() {
                    let delta = removal_delta + insertion_cost(to_route, to_pos, stop, depot, costs);

                    if delta < -IMPROVEMENT_EPS && best.as_ref().is_none_or(|b| delta < b.delta) {
                        best = Some(RelocateMove {
                            from_route: from_r,
                            from_pos,
                            to_route: to_r,
                            to_pos,
                            delta,
                        });
                    }
                }
            }
        }
    }

    best
}

/// Cost of removing the stop at `pos` from route.
fn removal_cost(route: &[usize], pos: usize, depot: usize, costs: &CostMatrix) -> f64 {
    let prev = if pos == 0 { depot } else { route[pos - 1] };
    let next = if pos == route.len() - 1 {
        depot
    } else {
        route[pos + 1]
    };
    let stop = route[pos];

    // Old: prev → stop → next
    // New: prev → next
    costs.get(prev, next) - costs.get(prev, stop) - costs.get(stop, next)
}

/// Cost of inserting `stop` at `pos` in route.
fn insertion_cost(route: &[usize], pos: usize, stop: usize, depot: usize, costs: &CostMatrix) -> f64 {
    let prev = if pos == 0 { depot } else { route[pos - 1] };
    let next = if pos == route.len() {
        depot
    } else {
        route[pos]
    };

    // Old: prev → next
    // New: prev → stop → next
    costs.get(prev, stop) + costs.get(stop, next) - costs.get(prev, next)
}
