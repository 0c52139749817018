//! Intra-tour 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of cut points (i, j) with i < j in a tour, compute the
//! change in distance from reversing the segment between them:
//!
//! ```text
//! delta = d(prev_i, t[j]) + d(t[i], next_j) - d(prev_i, t[i]) - d(t[j], next_j)
//! ```
//!
//! with the depot substituted for `prev_i` and `next_j` at the tour ends.
//! If delta < 0, reverse `t[i..=j]` and restart the pair scan from the top
//! of the tour (first-improvement strategy). A full pass without an
//! improving pair completes the tour.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::models::{CvrpProblem, Solution, Tour};

/// Applies 2-opt improvement to every tour of the solution in place.
///
/// Returns `true` if any reversal was committed. Tour membership and loads
/// are untouched; only the visit order within tours changes, so capacity
/// feasibility is preserved trivially.
///
/// # Examples
///
/// ```
/// use cvrp_heur::local_search::two_opt_improve;
/// use cvrp_heur::distance::DistanceMatrix;
/// use cvrp_heur::models::{MatrixProblem, Solution, Tour};
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// let problem = MatrixProblem::new(vec![0.0, 1.0, 1.0, 1.0], dm, 10.0, 1).unwrap();
///
/// // Backtracking order: 0→3→1→2→0 costs 8.
/// let mut tour = Tour::new();
/// for n in [3, 1, 2] {
///     tour.push(n, 1.0);
/// }
/// let mut solution = Solution::new();
/// solution.add_tour(tour);
///
/// assert!(two_opt_improve(&mut solution, &problem));
/// assert!((solution.total_cost(&problem) - 6.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve<P: CvrpProblem>(solution: &mut Solution, problem: &P) -> bool {
    let mut changed = false;
    for tour in solution.tours_mut() {
        changed |= improve_tour(tour, problem);
    }
    changed
}

/// Runs the 2-opt scan on one tour until no improving pair remains.
fn improve_tour<P: CvrpProblem>(tour: &mut Tour, problem: &P) -> bool {
    let n = tour.len();
    if n < 2 {
        return false;
    }

    let mut changed = false;
    'scan: loop {
        for i in 0..n - 1 {
            for j in i + 1..n {
                if reversal_delta(tour.nodes(), problem, i, j) < -1e-10 {
                    tour.reverse_segment(i, j);
                    changed = true;
                    continue 'scan;
                }
            }
        }
        break;
    }
    changed
}

/// Distance change from reversing `nodes[i..=j]`.
///
/// Before: prev_i - nodes[i] - ... - nodes[j] - next_j
/// After:  prev_i - nodes[j] - ... - nodes[i] - next_j
fn reversal_delta<P: CvrpProblem>(nodes: &[usize], problem: &P, i: usize, j: usize) -> f64 {
    let depot = problem.depot_id();
    let prev = if i == 0 { depot } else { nodes[i - 1] };
    let next = if j == nodes.len() - 1 { depot } else { nodes[j + 1] };

    let old_cost = problem.distance(prev, nodes[i]) + problem.distance(nodes[j], next);
    let new_cost = problem.distance(prev, nodes[j]) + problem.distance(nodes[i], next);

    new_cost - old_cost
}
