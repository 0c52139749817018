//! Local search descent over all three operators.

use super::{exchange_improve, relocate_improve, two_opt_improve};
use crate::models::{CvrpProblem, Solution};

/// Upper bound on descent passes.
///
/// Every pass that reports a change strictly reduced total distance, so the
/// descent cannot cycle; the cap only guards against pathological instances
/// taking unreasonably long to settle.
pub const MAX_DESCENT_ROUNDS: usize = 10_000;

/// Improves the solution in place until no operator finds a move.
///
/// The operators run in fixed priority order — 2-opt, then relocate, then
/// exchange — and any reported change restarts the pass from the top.
/// Returns `true` once a full pass reports no change (the solution is
/// locally optimal for all three neighborhoods), or `false` if
/// [`MAX_DESCENT_ROUNDS`] passes elapsed first.
///
/// Total distance never increases; calling `descent` again on a converged
/// solution performs no mutations.
///
/// # Examples
///
/// ```
/// use cvrp_heur::constructive::get_feasible;
/// use cvrp_heur::local_search::descent;
/// use cvrp_heur::distance::DistanceMatrix;
/// use cvrp_heur::models::MatrixProblem;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = [(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let problem = MatrixProblem::new(vec![0.0, 4.0, 4.0, 4.0], dm, 10.0, 2).unwrap();
/// let mut rng = StdRng::seed_from_u64(3);
///
/// let mut solution = get_feasible(&problem, &mut rng, 1000).expect("feasible");
/// let before = solution.total_cost(&problem);
/// assert!(descent(&mut solution, &problem));
/// assert!(solution.total_cost(&problem) <= before + 1e-10);
/// ```
pub fn descent<P: CvrpProblem>(solution: &mut Solution, problem: &P) -> bool {
    for _ in 0..MAX_DESCENT_ROUNDS {
        let changed = two_opt_improve(solution, problem)
            || relocate_improve(solution, problem)
            || exchange_improve(solution, problem);
        if !changed {
            return true;
        }
    }
    false
}
