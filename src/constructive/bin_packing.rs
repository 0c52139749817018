//! Bin-packing constructive heuristic.
//!
//! # Algorithm
//!
//! Open a tour on a uniformly random non-depot seed. Sort the remaining
//! customers by strictly decreasing distance to the seed and scan them
//! farthest-first: a customer that fits under the remaining capacity is
//! committed to the tour, one that does not is left pending and the scan
//! moves on. When the scan has examined every pending customer without
//! placing one, the tour is closed and a new tour is seeded with the
//! farthest remaining customer, the remainder is re-sorted against the new
//! seed, and the scan restarts. Tours built this way pack distant customers
//! together, so the fleet bound is not guaranteed; [`get_feasible`] retries
//! until it holds.
//!
//! # Complexity
//!
//! O(n² log n) worst case (one sort per opened tour).

use rand::Rng;

use crate::models::{CvrpProblem, Solution, Tour};

/// Builds one solution by farthest-first capacity packing.
///
/// Every customer is placed in exactly one tour and every tour respects the
/// vehicle capacity, but the number of tours may exceed the fleet size.
///
/// # Examples
///
/// ```
/// use cvrp_heur::constructive::construct_clusters;
/// use cvrp_heur::distance::DistanceMatrix;
/// use cvrp_heur::models::MatrixProblem;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let problem = MatrixProblem::new(vec![0.0, 5.0, 5.0], dm, 20.0, 1).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let solution = construct_clusters(&problem, &mut rng);
/// assert!(solution.covers_all_customers(&problem));
/// ```
pub fn construct_clusters<P: CvrpProblem, R: Rng>(problem: &P, rng: &mut R) -> Solution {
    let n = problem.node_count();
    let depot = problem.depot_id();
    let capacity = problem.capacity();

    let mut solution = Solution::new();
    if n <= 1 {
        return solution;
    }

    let mut seed = loop {
        let candidate = rng.random_range(0..n);
        if candidate != depot {
            break candidate;
        }
    };

    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != depot && i != seed).collect();
    let mut tour = Tour::new();
    tour.push(seed, problem.demand(seed));
    sort_by_distance_to(&mut remaining, seed, problem);

    let mut cursor = 0;
    while !remaining.is_empty() {
        if cursor >= remaining.len() {
            // Every pending customer was examined and none fits. Close the
            // tour and reseed with the farthest remaining customer.
            solution.add_tour(std::mem::take(&mut tour));
            seed = remaining.remove(0);
            tour.push(seed, problem.demand(seed));
            sort_by_distance_to(&mut remaining, seed, problem);
            cursor = 0;
            continue;
        }

        let candidate = remaining[cursor];
        if tour.fits(problem.demand(candidate), capacity) {
            tour.push(candidate, problem.demand(candidate));
            remaining.remove(cursor);
        } else {
            cursor += 1;
        }
    }
    solution.add_tour(tour);

    solution
}

/// Builds a fleet-feasible solution by retrying [`construct_clusters`].
///
/// Returns the first solution whose tour count is within the fleet size, or
/// `None` once `max_attempts` constructions have all failed the bound. The
/// retry is pure rejection sampling; instances whose demands cannot be
/// packed into the fleet at all will exhaust the cap.
///
/// # Examples
///
/// ```
/// use cvrp_heur::constructive::get_feasible;
/// use cvrp_heur::distance::DistanceMatrix;
/// use cvrp_heur::models::{CvrpProblem, MatrixProblem};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = [(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let problem = MatrixProblem::new(vec![0.0, 4.0, 4.0, 4.0], dm, 10.0, 2).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let solution = get_feasible(&problem, &mut rng, 1000).expect("feasible");
/// assert!(solution.num_tours() <= problem.vehicle_count());
/// ```
pub fn get_feasible<P: CvrpProblem, R: Rng>(
    problem: &P,
    rng: &mut R,
    max_attempts: usize,
) -> Option<Solution> {
    for _ in 0..max_attempts {
        let solution = construct_clusters(problem, rng);
        if solution.num_tours() <= problem.vehicle_count() {
            return Some(solution);
        }
    }
    None
}

/// Sorts `nodes` by strictly decreasing distance to `to`. The sort is
/// stable, so equal-distance nodes retain their prior relative order.
fn sort_by_distance_to<P: CvrpProblem>(nodes: &mut [usize], to: usize, problem: &P) {
    nodes.sort_by(|&a, &b| {
        problem
            .distance(b, to)
            .partial_cmp(&problem.distance(a, to))
            .expect("distance should not be NaN")
    });
}
