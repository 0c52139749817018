//! Inter-tour customer exchange operator.
//!
//! # Algorithm
//!
//! For every pair of distinct tours and every pair of customers (c1 in T1,
//! c2 in T2), compare the distance through each customer's neighborhood
//! before and after swapping the two:
//!
//! ```text
//! before = d(p1, c1) + d(c1, n1) + d(p2, c2) + d(c2, n2)
//! after  = d(p1, c2) + d(c2, n1) + d(p2, c1) + d(c1, n2)
//! ```
//!
//! with the depot substituted for missing neighbors at tour boundaries. A
//! swap with `after < before` that keeps both tours capacity-feasible is
//! committed immediately and the whole scan restarts (first-improvement
//! strategy). Swapping is symmetric, so unordered tour pairs suffice.
//!
//! # Complexity
//!
//! O(n² × R²) per pass where n = customers per tour, R = number of tours.

use crate::models::{CvrpProblem, Solution, Tour};

/// An exchange move: swap the customer at `pos1` of `tour1` with the
/// customer at `pos2` of `tour2`.
#[derive(Debug, Clone)]
struct ExchangeMove {
    tour1: usize,
    pos1: usize,
    tour2: usize,
    pos2: usize,
}

/// Applies inter-tour customer exchange to the solution in place.
///
/// Returns `true` if any pair of customers swapped tours. Committed swaps
/// strictly reduce total distance and keep both tours within capacity.
///
/// # Examples
///
/// ```
/// use cvrp_heur::local_search::exchange_improve;
/// use cvrp_heur::distance::DistanceMatrix;
/// use cvrp_heur::models::{MatrixProblem, Solution, Tour};
///
/// // Two customers east, two west; the initial tours interleave them.
/// let points = [(0.0, 0.0), (5.0, 1.0), (-5.0, -1.0), (5.0, -1.0), (-5.0, 1.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let problem = MatrixProblem::new(vec![0.0, 4.0, 4.0, 4.0, 4.0], dm, 8.0, 2).unwrap();
///
/// let mut east_west = Tour::new();
/// east_west.push(1, 4.0);
/// east_west.push(2, 4.0);
/// let mut west_east = Tour::new();
/// west_east.push(4, 4.0);
/// west_east.push(3, 4.0);
/// let mut solution = Solution::new();
/// solution.add_tour(east_west);
/// solution.add_tour(west_east);
///
/// let before = solution.total_cost(&problem);
/// assert!(exchange_improve(&mut solution, &problem));
/// assert!(solution.total_cost(&problem) < before);
/// ```
pub fn exchange_improve<P: CvrpProblem>(solution: &mut Solution, problem: &P) -> bool {
    if solution.num_tours() < 2 {
        return false;
    }

    let mut changed = false;
    while let Some(mv) = find_exchange(solution.tours(), problem) {
        let c1 = solution.tours()[mv.tour1].nodes()[mv.pos1];
        let c2 = solution.tours()[mv.tour2].nodes()[mv.pos2];
        let d1 = problem.demand(c1);
        let d2 = problem.demand(c2);
        let tours = solution.tours_mut();
        tours[mv.tour1].replace(mv.pos1, c2, d1, d2);
        tours[mv.tour2].replace(mv.pos2, c1, d2, d1);
        changed = true;
    }
    changed
}

/// Finds the first improving exchange, scanning unordered tour pairs.
fn find_exchange<P: CvrpProblem>(tours: &[Tour], problem: &P) -> Option<ExchangeMove> {
    let depot = problem.depot_id();
    let capacity = problem.capacity();

    for tour1 in 0..tours.len() {
        for tour2 in (tour1 + 1)..tours.len() {
            let nodes1 = tours[tour1].nodes();
            let nodes2 = tours[tour2].nodes();

            for pos1 in 0..nodes1.len() {
                let c1 = nodes1[pos1];
                let d1 = problem.demand(c1);
                let prev1 = if pos1 == 0 { depot } else { nodes1[pos1 - 1] };
                let next1 = if pos1 == nodes1.len() - 1 {
                    depot
                } else {
                    nodes1[pos1 + 1]
                };
                let around1 = problem.distance(prev1, c1) + problem.distance(c1, next1);

                for pos2 in 0..nodes2.len() {
                    let c2 = nodes2[pos2];
                    let d2 = problem.demand(c2);

                    // Both tours must stay feasible after the swap.
                    if tours[tour1].used_capacity() - d1 + d2 > capacity
                        || tours[tour2].used_capacity() - d2 + d1 > capacity
                    {
                        continue;
                    }

                    let prev2 = if pos2 == 0 { depot } else { nodes2[pos2 - 1] };
                    let next2 = if pos2 == nodes2.len() - 1 {
                        depot
                    } else {
                        nodes2[pos2 + 1]
                    };

                    let before = around1 + problem.distance(prev2, c2) + problem.distance(c2, next2);
                    let after = problem.distance(prev1, c2)
                        + problem.distance(c2, next1)
                        + problem.distance(prev2, c1)
                        + problem.distance(c1, next2);

                    if after < before - 1e-10 {
                        return Some(ExchangeMove {
                            tour1,
                            pos1,
                            tour2,
                            pos2,
                        });
                    }
                }
            }
        }
    }

    None
}
