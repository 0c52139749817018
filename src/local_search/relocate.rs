//! Inter-tour customer relocation operator.
//!
//! # Algorithm
//!
//! For every ordered pair of distinct tours (T1, T2), every customer of T1,
//! and every insertion position of T2, compute the removal gain
//!
//! ```text
//! gain = d(prev, c) + d(c, next) - d(prev, next)
//! ```
//!
//! and the insertion loss
//!
//! ```text
//! loss = d(prev_ins, next_ins) - d(prev_ins, c) - d(c, next_ins)
//! ```
//!
//! with the depot substituted for missing neighbors at tour boundaries. A
//! move with `gain + loss > 0` that fits T2's residual capacity is
//! committed immediately and the whole scan restarts (first-improvement
//! strategy).
//!
//! # Complexity
//!
//! O(n² × R²) per pass where n = customers per tour, R = number of tours.

use crate::models::{CvrpProblem, Solution, Tour};

/// A relocate move: take the customer at `from_pos` out of `from_tour` and
/// insert it at `to_pos` in `to_tour`.
#[derive(Debug, Clone)]
struct RelocateMove {
    from_tour: usize,
    from_pos: usize,
    to_tour: usize,
    to_pos: usize,
}

/// Applies inter-tour relocation to the solution in place.
///
/// Returns `true` if any customer changed tours. Committed moves strictly
/// reduce total distance and never violate the destination tour's capacity.
///
/// # Examples
///
/// ```
/// use cvrp_heur::local_search::relocate_improve;
/// use cvrp_heur::distance::DistanceMatrix;
/// use cvrp_heur::models::{MatrixProblem, Solution, Tour};
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 3.0)]);
/// let problem = MatrixProblem::new(vec![0.0, 1.0, 1.0, 1.0], dm, 10.0, 2).unwrap();
///
/// // Everything fits one vehicle; relocation merges the two tours.
/// let mut near = Tour::new();
/// near.push(1, 1.0);
/// let mut far = Tour::new();
/// far.push(2, 1.0);
/// far.push(3, 1.0);
/// let mut solution = Solution::new();
/// solution.add_tour(near);
/// solution.add_tour(far);
///
/// let before = solution.total_cost(&problem);
/// assert!(relocate_improve(&mut solution, &problem));
/// assert!(solution.total_cost(&problem) < before);
/// ```
pub fn relocate_improve<P: CvrpProblem>(solution: &mut Solution, problem: &P) -> bool {
    if solution.num_tours() < 2 {
        return false;
    }

    let mut changed = false;
    while let Some(mv) = find_relocate(solution.tours(), problem) {
        let node = solution.tours()[mv.from_tour].nodes()[mv.from_pos];
        let demand = problem.demand(node);
        let tours = solution.tours_mut();
        tours[mv.from_tour].remove(mv.from_pos, demand);
        tours[mv.to_tour].insert(mv.to_pos, node, demand);
        changed = true;
    }
    changed
}

/// Finds the first improving relocate move, scanning tours in order.
fn find_relocate<P: CvrpProblem>(tours: &[Tour], problem: &P) -> Option<RelocateMove> {
    let depot = problem.depot_id();
    let capacity = problem.capacity();

    for from_tour in 0..tours.len() {
        for to_tour in 0..tours.len() {
            if to_tour == from_tour {
                continue;
            }

            let from = tours[from_tour].nodes();
            for from_pos in 0..from.len() {
                let node = from[from_pos];
                let demand = problem.demand(node);
                if !tours[to_tour].fits(demand, capacity) {
                    continue;
                }

                let prev = if from_pos == 0 { depot } else { from[from_pos - 1] };
                let next = if from_pos == from.len() - 1 {
                    depot
                } else {
                    from[from_pos + 1]
                };
                let gain = problem.distance(prev, node) + problem.distance(node, next)
                    - problem.distance(prev, next);

                let to = tours[to_tour].nodes();
                for to_pos in 0..=to.len() {
                    let prev_ins = if to_pos == 0 { depot } else { to[to_pos - 1] };
                    let next_ins = if to_pos == to.len() { depot } else { to[to_pos] };
                    let loss = problem.distance(prev_ins, next_ins)
                        - problem.distance(prev_ins, node)
                        - problem.distance(node, next_ins);

                    if gain + loss > 1e-10 {
                        return Some(RelocateMove {
                            from_tour,
                            from_pos,
                            to_tour,
                            to_pos,
                        });
                    }
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::MatrixProblem;

    fn solution_of(routes: &[&[usize]], problem: &MatrixProblem) -> Solution {
        let mut sol = Solution::new();
        for route in routes {
            let mut tour = Tour::new();
            for &n in *route {
                tour.push(n, problem.demand(n));
            }
            sol.add_tour(tour);
        }
        sol
    }

    #[test]
    fn test_relocate_single_tour_is_noop() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let problem = MatrixProblem::new(vec![0.0, 1.0, 1.0], dm, 10.0, 1).expect("valid");
        let mut sol = solution_of(&[&[2, 1]], &problem);
        assert!(!relocate_improve(&mut sol, &problem));
        assert_eq!(sol.tours()[0].nodes(), &[2, 1]);
    }

    #[test]
    fn test_relocate_consolidates_tours() {
        // Capacity allows one vehicle to serve everything; relocation
        // drains the short tour into the long one.
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 3.0)]);
        let problem = MatrixProblem::new(vec![0.0, 1.0, 1.0, 1.0], dm, 10.0, 2).expect("valid");
        let mut sol = solution_of(&[&[1], &[2, 3]], &problem);
        let before = sol.total_cost(&problem);

        assert!(relocate_improve(&mut sol, &problem));

        assert!(sol.total_cost(&problem) < before);
        assert!(sol.covers_all_customers(&problem));
        // Customer 2 ends up with customer 1.
        let with_one: Vec<_> = sol
            .tours()
            .iter()
            .find(|t| t.nodes().contains(&1))
            .expect("tour of customer 1")
            .nodes()
            .to_vec();
        assert!(with_one.contains(&2));
    }

    #[test]
    fn test_relocate_respects_capacity() {
        // Consolidating would shorten the tours but no destination has
        // room: capacity 8 against loads of 5 and 4+4.
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 3.0)]);
        let problem = MatrixProblem::new(vec![0.0, 5.0, 4.0, 4.0], dm, 8.0, 2).expect("valid");
        let mut sol = solution_of(&[&[1], &[2, 3]], &problem);
        assert!(!relocate_improve(&mut sol, &problem));
        assert_eq!(sol.tours()[0].nodes(), &[1]);
        assert_eq!(sol.tours()[1].nodes(), &[2, 3]);
    }

    #[test]
    fn test_relocate_updates_cached_loads() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 3.0)]);
        let problem = MatrixProblem::new(vec![0.0, 1.0, 2.0, 4.0], dm, 10.0, 2).expect("valid");
        let mut sol = solution_of(&[&[1], &[2, 3]], &problem);
        relocate_improve(&mut sol, &problem);
        for tour in sol.tours() {
            let expected: f64 = tour.nodes().iter().map(|&n| problem.demand(n)).sum();
            assert!((tour.used_capacity() - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_relocate_moves_from_later_to_earlier_tour() {
        // The only improving move takes customer 2 out of the *second*
        // tour into the first (capacity blocks the opposite direction), so
        // the scan must cover ordered tour pairs in both directions.
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (5.0, 0.0), (4.0, 0.0), (0.0, 5.0)]);
        let problem = MatrixProblem::new(vec![0.0, 5.0, 5.0, 5.0], dm, 10.0, 2).expect("valid");
        let mut sol = solution_of(&[&[1], &[2, 3]], &problem);
        assert!(relocate_improve(&mut sol, &problem));
        assert_eq!(sol.tours()[0].nodes(), &[2, 1]);
        assert_eq!(sol.tours()[1].nodes(), &[3]);
    }

    #[test]
    fn test_relocate_converged_is_fixed_point() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 3.0)]);
        let problem = MatrixProblem::new(vec![0.0, 1.0, 1.0, 1.0], dm, 10.0, 2).expect("valid");
        let mut sol = solution_of(&[&[1], &[2, 3]], &problem);
        relocate_improve(&mut sol, &problem);
        let cost = sol.total_cost(&problem);
        assert!(!relocate_improve(&mut sol, &problem));
        assert!((sol.total_cost(&problem) - cost).abs() < 1e-10);
    }
}
