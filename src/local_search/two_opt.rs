//! Intra-route 2-opt improvement for directed costs.
//!
//! # Algorithm
//!
//! For each pair of positions (i, j) in a route, consider reversing the
//! segment `r[i..=j]`. With asymmetric costs the reversed segment is driven
//! the other way round, so its inner legs are re-priced as well:
//!
//! ```text
//! before = c(prev, r[i]) + Σ c(r[t], r[t+1]) + c(r[j], next)
//! after  = c(prev, r[j]) + Σ c(r[t+1], r[t]) + c(r[i], next)
//! ```
//!
//! If `after < before`, the reversal is applied (first-improvement).
//! Passes repeat until no reversal helps or the deadline passes.
//!
//! # Complexity
//!
//! O(n³) per pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::CostMatrix;

use super::{route_cost, Deadline, IMPROVEMENT_EPS};

/// Applies 2-opt improvement to a single route given as its stop sequence
/// (depot excluded). Returns the improved sequence and its closed-tour
/// cost.
///
/// # Examples
///
/// ```
/// use rover_routing::distance::CostMatrix;
/// use rover_routing::local_search::{route_cost, two_opt_improve, Deadline};
///
/// // Points on a line at 0, 1, 2, 3
/// let costs = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// let (improved, cost) = two_opt_improve(&[1, 3, 2], 0, &costs, &Deadline::none());
/// assert!(cost <= route_cost(&[1, 3, 2], 0, &costs));
/// assert!((cost - 6.0).abs() < 1e-10);
/// assert_eq!(improved.len(), 3);
/// ```
pub fn two_opt_improve(
    route: &[usize],
    depot: usize,
    costs: &CostMatrix,
    deadline: &Deadline,
) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    let n = current.len();

    let mut improved = n >= 2;
    while improved && !deadline.expired() {
        improved = false;

        for i in 0..n - 1 {
            for j in i + 1..n {
                if two_opt_delta(&current, depot, costs, i, j) < -IMPROVEMENT_EPS {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let cost = route_cost(&current, depot, costs);
    (current, cost)
}

/// Cost change from reversing `route[i..=j]`.
fn two_opt_delta(route: &[usize], depot: usize, costs: &CostMatrix, i: usize, j: usize) -> f64 {
    let n = route.len();
    let prev = if i == 0 { depot } else { route[i - 1] };
    let next = if j == n - 1 { depot } else { route[j + 1] };

    let mut before = costs.get(prev, route[i]) + costs.get(route[j], next);
    let mut after = costs.get(prev, route[j]) + costs.get(route[i], next);
    for t in i..j {
        before += costs.get(route[t], route[t + 1]);
        after += costs.get(route[t + 1], route[t]);
    }

    after - before
}
