//! Intra-route Or-opt improvement.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive stops to a different
//! position within the same route, keeping the segment's direction. The
//! best improving move of a pass is applied; passes repeat until none
//! improves or the deadline passes.
//!
//! # Complexity
//!
//! O(n²) per pass.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::CostMatrix;

use super::{route_cost, Deadline, IMPROVEMENT_EPS};

/// Applies Or-opt improvement to a single route given as its stop
/// sequence (depot excluded). Returns the improved sequence and its
/// closed-tour cost.
///
/// # Examples
///
/// ```
/// use rover_routing::distance::CostMatrix;
/// use rover_routing::local_search::{or_opt_improve, route_cost, Deadline};
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// let (improved, cost) = or_opt_improve(&[2, 1, 3], 0, &costs, &Deadline::none());
/// assert!(cost < route_cost(&[2, 1, 3], 0, &costs));
/// assert_eq!(improved, vec![1, 2, 3]);
/// ```
pub fn or_opt_improve(
    route: &[usize],
    depot: usize,
    costs: &CostMatrix,
    deadline: &Deadline,
) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();

    let mut improved = current.len() >= 2;
    while improved && !deadline.expired() {
        improved = false;
        for seg_len in 1..=3.min(current.len() - 1) {
            if try_or_opt_pass(&mut current, depot, costs, seg_len) {
                improved = true;
            }
        }
    }

    let cost = route_cost(&current, depot, costs);
    (current, cost)
}

/// One pass of Or-opt for a given segment length. Returns true if improved.
fn try_or_opt_pass(route: &mut Vec<usize>, depot: usize, costs: &CostMatrix, seg_len: usize) -> bool {
    let n = route.len();
    if n < seg_len + 1 {
        return false;
    }

    let mut best: Option<(f64, usize, usize)> = None;

    for from in 0..=(n - seg_len) {
        let seg_first = route[from];
        let seg_last = route[from + seg_len - 1];
        let prev = if from == 0 { depot } else { route[from - 1] };
        let after = if from + seg_len == n {
            depot
        } else {
            route[from + seg_len]
        };

        // prev→first + last→after become prev→after
        let removal = costs.get(prev, after) - costs.get(prev, seg_first) - costs.get(seg_last, after);

        // Positions below refer to the route with the segment taken out.
        let rest: Vec<usize> = route[..from]
            .iter()
            .chain(&route[from + seg_len..])
            .copied()
            .collect();

        for to in 0..=rest.len() {
            if to == from {
                continue;
            }
            let ins_prev = if to == 0 { depot } else { rest[to - 1] };
            let ins_next = if to == rest.len() { depot } else { rest[to] };

            let insertion = costs.get(ins_prev, seg_first) + costs.get(seg_last, ins_next)
                - costs.get(ins_prev, ins_next);
            let delta = removal + insertion;

            if delta < -IMPROVEMENT_EPS && best.is_none_or(|(bd, _, _)| delta < bd) {
                best = Some((delta, from, to));
            }
        }
    }

    let Some((_, from, to)) = best else {
        return false;
    };

    let segment: Vec<usize> = route.drain(from..from + seg_len).collect();
    route.splice(to..to, segment);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![3.0, 2.0, 1.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_or_opt_already_optimal() {
        let (improved, cost) = or_opt_improve(&[1, 2, 3], 0, &line(), &Deadline::none());
        assert_eq!(improved, vec![1, 2, 3]);
        assert!((cost - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_empty() {
        let (improved, cost) = or_opt_improve(&[], 0, &line(), &Deadline::none());
        assert!(improved.is_empty());
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_or_opt_single() {
        let (improved, cost) = or_opt_improve(&[2], 0, &line(), &Deadline::none());
        assert_eq!(improved, vec![2]);
        assert!((cost - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_moves_segment_keeping_direction() {
        // One-way ring 0→1→2→3→4→0 is cheap; everything else costs 9.
        let mut rows = vec![vec![9.0; 5]; 5];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 0.0;
            row[(i + 1) % 5] = 1.0;
        }
        let costs = CostMatrix::from_rows(rows).expect("valid");
        // Segment [1, 2] sits at the wrong end.
        let initial = vec![3, 4, 1, 2];
        let (improved, cost) = or_opt_improve(&initial, 0, &costs, &Deadline::none());
        assert_eq!(improved, vec![1, 2, 3, 4]);
        assert!((cost - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_does_not_worsen() {
        let costs = CostMatrix::from_rows(vec![
            vec![0.0, 3.0, 7.0, 2.0, 5.0],
            vec![4.0, 0.0, 1.0, 8.0, 6.0],
            vec![2.0, 9.0, 0.0, 3.0, 1.0],
            vec![6.0, 2.0, 5.0, 0.0, 7.0],
            vec![1.0, 4.0, 2.0, 9.0, 0.0],
        ])
        .expect("valid");
        let initial = vec![4, 1, 3, 2];
        let initial_cost = route_cost(&initial, 0, &costs);
        let (improved, cost) = or_opt_improve(&initial, 0, &costs, &Deadline::none());
        assert!(cost <= initial_cost + 1e-10);
        let mut sorted = improved.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        assert!((route_cost(&improved, 0, &costs) - cost).abs() < 1e-10);
    }
}
