//! Ant colony system solver.

use rand::Rng;

use super::{Ant, PheromoneMatrix};
use crate::models::{CvrpProblem, Solution, Tour};

/// Parameters for an [`AntColony`] run.
#[derive(Debug, Clone)]
pub struct AcoParams {
    /// Number of construction + reinforcement iterations.
    pub iterations: usize,
    /// Number of ants per iteration.
    pub ants: usize,
    /// Exponent weighting inverse distance against pheromone level.
    pub beta: f64,
    /// Evaporation / reinforcement rate in `[0, 1]`.
    pub alpha: f64,
    /// Probability of greedy (exploitation) node choice; the complement
    /// selects by roulette wheel.
    pub q0: f64,
    /// Initial and baseline pheromone level.
    pub t0: f64,
}

impl Default for AcoParams {
    fn default() -> Self {
        Self {
            iterations: 100,
            ants: 20,
            beta: 2.0,
            alpha: 0.1,
            q0: 0.9,
            t0: 0.1,
        }
    }
}

/// Ant colony optimization constructor for the CVRP.
///
/// Each ant builds one composite path over all customers, returning to the
/// depot whenever no unvisited customer fits the remaining capacity. The
/// iteration's best ant reinforces the pheromone trail it walked, all trails
/// then evaporate toward the baseline, and the best path seen across all
/// iterations is split at its depot returns into the final [`Solution`].
///
/// A path that uses more vehicles than the fleet allows is penalized with
/// [`f64::MAX`] distance, which keeps it from ever being selected as best;
/// it is a structural dead end, not an error.
///
/// # Examples
///
/// ```
/// use cvrp_heur::aco::{AcoParams, AntColony};
/// use cvrp_heur::distance::DistanceMatrix;
/// use cvrp_heur::models::MatrixProblem;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = [(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let problem = MatrixProblem::new(vec![0.0, 4.0, 4.0, 4.0], dm, 10.0, 2).unwrap();
///
/// let colony = AntColony::new(AcoParams { iterations: 30, ..AcoParams::default() });
/// let mut rng = StdRng::seed_from_u64(11);
/// let solution = colony.run(&problem, &mut rng);
/// assert!(solution.covers_all_customers(&problem));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AntColony {
    params: AcoParams,
}

impl AntColony {
    /// Creates a colony with the given parameters.
    pub fn new(params: AcoParams) -> Self {
        Self { params }
    }

    /// Returns the run parameters.
    pub fn params(&self) -> &AcoParams {
        &self.params
    }

    /// Runs the colony against the problem and returns the best solution
    /// found.
    ///
    /// The pheromone model lives for exactly one call; successive runs are
    /// independent apart from the caller's RNG state.
    pub fn run<P: CvrpProblem, R: Rng>(&self, problem: &P, rng: &mut R) -> Solution {
        let n = problem.node_count();
        let depot = problem.depot_id();
        let p = &self.params;

        if n <= 1 || p.ants == 0 {
            return Solution::new();
        }

        let mut pheromones = PheromoneMatrix::new(n, p.t0);
        let mut ants: Vec<Ant> = (0..p.ants).map(|_| Ant::new(problem)).collect();

        let mut best_distance = f64::MAX;
        let mut best_path: Vec<usize> = Vec::new();

        for iteration in 0..p.iterations {
            for ant in &mut ants {
                while ant.visited < n {
                    self.select_node(ant, problem, &pheromones, rng);
                }
                if ant.path.last() != Some(&depot) {
                    ant.return_to_depot(problem);
                }
                let depot_stops = ant.path.iter().filter(|&&node| node == depot).count();
                if depot_stops > problem.vehicle_count() + 1 {
                    // Over-fleet paths must never be selected as best.
                    ant.distance = f64::MAX;
                }
            }

            // The iteration's best ant; ties keep the earliest.
            let mut leader = 0;
            for (i, ant) in ants.iter().enumerate().skip(1) {
                if ant.distance < ants[leader].distance {
                    leader = i;
                }
            }
            let leader = &ants[leader];
            if leader.distance < best_distance {
                best_distance = leader.distance;
                best_path = leader.path.clone();
            }

            if leader.distance > 0.0 {
                let deposit = 1.0 / leader.distance;
                for pair in leader.path.windows(2) {
                    if pair[0] != pair[1] {
                        pheromones.reinforce(pair[0], pair[1], p.alpha, deposit);
                    }
                }
            }
            pheromones.evaporate(p.alpha);

            if iteration != p.iterations - 1 {
                for ant in &mut ants {
                    ant.reset(problem);
                }
            }
        }

        split_into_tours(&best_path, problem)
    }

    /// Advances one ant by one step: pick the next customer, or return to
    /// the depot when no unvisited customer fits the remaining capacity.
    fn select_node<P: CvrpProblem, R: Rng>(
        &self,
        ant: &mut Ant,
        problem: &P,
        pheromones: &PheromoneMatrix,
        rng: &mut R,
    ) {
        let q: f64 = rng.random();
        if q < self.params.q0 {
            self.select_greedy(ant, problem, pheromones);
        } else {
            self.select_roulette(ant, problem, pheromones, rng);
        }
    }

    /// Exploitation: the feasible candidate with the highest desirability.
    /// Strict comparison keeps the earliest candidate on ties.
    fn select_greedy<P: CvrpProblem>(
        &self,
        ant: &mut Ant,
        problem: &P,
        pheromones: &PheromoneMatrix,
    ) {
        let mut best: Option<(usize, f64)> = None;
        for node in 0..problem.node_count() {
            if node == problem.depot_id() || ant.has_seen(node) {
                continue;
            }
            if problem.demand(node) > ant.remaining_capacity {
                continue;
            }
            let score = self.desirability(ant.position, node, problem, pheromones);
            if best.as_ref().is_none_or(|&(_, s)| score > s) {
                best = Some((node, score));
            }
        }

        match best {
            Some((node, _)) => {
                let travel = problem.distance(ant.position, node);
                ant.visit(node, problem.demand(node), travel);
            }
            None => ant.return_to_depot(problem),
        }
    }

    /// Exploration: roulette-wheel selection over the normalized
    /// desirability distribution, sorted by score.
    fn select_roulette<P: CvrpProblem, R: Rng>(
        &self,
        ant: &mut Ant,
        problem: &P,
        pheromones: &PheromoneMatrix,
        rng: &mut R,
    ) {
        let mut candidates: Vec<(usize, f64)> = Vec::new();
        let mut total = 0.0;
        for node in 0..problem.node_count() {
            if node == problem.depot_id() || ant.has_seen(node) {
                continue;
            }
            if problem.demand(node) > ant.remaining_capacity {
                continue;
            }
            let score = self.desirability(ant.position, node, problem, pheromones);
            total += score;
            candidates.push((node, score));
        }

        if candidates.is_empty() {
            ant.return_to_depot(problem);
            return;
        }

        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).expect("score should not be NaN"));

        let draw: f64 = rng.random();
        let mut cumulative = 0.0;
        for &(node, score) in &candidates {
            cumulative += score / total;
            if cumulative > draw {
                let travel = problem.distance(ant.position, node);
                ant.visit(node, problem.demand(node), travel);
                return;
            }
        }

        // Rounding can leave the cumulative sum a hair below the draw;
        // fall back to the final (highest-score) candidate.
        let (node, _) = candidates[candidates.len() - 1];
        let travel = problem.distance(ant.position, node);
        ant.visit(node, problem.demand(node), travel);
    }

    fn desirability<P: CvrpProblem>(
        &self,
        from: usize,
        to: usize,
        problem: &P,
        pheromones: &PheromoneMatrix,
    ) -> f64 {
        pheromones.get(from, to) * (1.0 / problem.distance(from, to)).powf(self.params.beta)
    }
}

/// Splits a composite path into tours at each depot occurrence.
fn split_into_tours<P: CvrpProblem>(path: &[usize], problem: &P) -> Solution {
    let depot = problem.depot_id();
    let mut solution = Solution::new();
    let mut tour = Tour::new();
    for &node in path.iter().skip(1) {
        if node == depot {
            if !tour.is_empty() {
                solution.add_tour(std::mem::take(&mut tour));
            }
        } else {
            tour.push(node, problem.demand(node));
        }
    }
    if !tour.is_empty() {
        solution.add_tour(tour);
    }
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::MatrixProblem;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_problem() -> MatrixProblem {
        let points = [(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];
        let dm = DistanceMatrix::from_points(&points);
        MatrixProblem::new(vec![0.0, 4.0, 4.0, 4.0], dm, 10.0, 2).expect("valid")
    }

    fn line_problem() -> MatrixProblem {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        MatrixProblem::new(vec![0.0, 1.0, 1.0, 1.0], dm, 10.0, 1).expect("valid")
    }

    #[test]
    fn test_run_covers_every_customer() {
        let problem = square_problem();
        let colony = AntColony::new(AcoParams {
            iterations: 30,
            ants: 10,
            ..AcoParams::default()
        });
        let mut rng = StdRng::seed_from_u64(21);
        let solution = colony.run(&problem, &mut rng);
        assert!(solution.covers_all_customers(&problem));
    }

    #[test]
    fn test_run_respects_capacity_per_tour() {
        let problem = square_problem();
        let colony = AntColony::new(AcoParams {
            iterations: 30,
            ants: 10,
            ..AcoParams::default()
        });
        let mut rng = StdRng::seed_from_u64(22);
        let solution = colony.run(&problem, &mut rng);
        for tour in solution.tours() {
            assert!(tour.used_capacity() <= problem.capacity() + 1e-10);
        }
    }

    #[test]
    fn test_run_stays_within_fleet_on_square() {
        // Capacity 10 with demands of 4 forces a depot return after every
        // second customer, so every constructed path uses exactly the two
        // vehicles the fleet allows.
        let problem = square_problem();
        let colony = AntColony::new(AcoParams {
            iterations: 20,
            ants: 5,
            ..AcoParams::default()
        });
        let mut rng = StdRng::seed_from_u64(23);
        let solution = colony.run(&problem, &mut rng);
        assert!(solution.num_tours() <= problem.vehicle_count());
        assert!(solution.is_feasible(&problem));
    }

    #[test]
    fn test_fully_greedy_uniform_pheromones_picks_nearest_first() {
        // q0 = 1.0 disables exploration and beta = 0 reduces desirability
        // to the pheromone level alone; with uniform initial pheromones the
        // first feasible candidate wins every tie, which on this line is
        // the nearest unvisited customer at each step.
        let problem = line_problem();
        let colony = AntColony::new(AcoParams {
            iterations: 1,
            ants: 1,
            beta: 0.0,
            q0: 1.0,
            ..AcoParams::default()
        });
        let mut rng = StdRng::seed_from_u64(24);
        let solution = colony.run(&problem, &mut rng);
        assert_eq!(solution.num_tours(), 1);
        assert_eq!(solution.tours()[0].nodes(), &[1, 2, 3]);
    }

    #[test]
    fn test_single_customer() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (2.0, 0.0)]);
        let problem = MatrixProblem::new(vec![0.0, 3.0], dm, 10.0, 1).expect("valid");
        let colony = AntColony::new(AcoParams {
            iterations: 5,
            ants: 3,
            ..AcoParams::default()
        });
        let mut rng = StdRng::seed_from_u64(25);
        let solution = colony.run(&problem, &mut rng);
        assert_eq!(solution.num_tours(), 1);
        assert_eq!(solution.tours()[0].nodes(), &[1]);
    }

    #[test]
    fn test_degenerate_runs_return_empty() {
        let problem = square_problem();
        let mut rng = StdRng::seed_from_u64(26);

        let no_iterations = AntColony::new(AcoParams {
            iterations: 0,
            ..AcoParams::default()
        });
        assert_eq!(no_iterations.run(&problem, &mut rng).num_tours(), 0);

        let no_ants = AntColony::new(AcoParams {
            ants: 0,
            ..AcoParams::default()
        });
        assert_eq!(no_ants.run(&problem, &mut rng).num_tours(), 0);

        let dm = DistanceMatrix::from_points(&[(0.0, 0.0)]);
        let empty = MatrixProblem::new(vec![0.0], dm, 10.0, 1).expect("valid");
        let colony = AntColony::new(AcoParams::default());
        assert_eq!(colony.run(&empty, &mut rng).num_tours(), 0);
    }

    #[test]
    fn test_split_into_tours() {
        let problem = square_problem();
        let path = vec![0, 1, 2, 0, 3, 0];
        let solution = split_into_tours(&path, &problem);
        assert_eq!(solution.num_tours(), 2);
        assert_eq!(solution.tours()[0].nodes(), &[1, 2]);
        assert_eq!(solution.tours()[1].nodes(), &[3]);
        assert!((solution.tours()[0].used_capacity() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_split_skips_empty_segments() {
        let problem = square_problem();
        let path = vec![0, 0, 1, 0, 0, 2, 3, 0];
        let solution = split_into_tours(&path, &problem);
        assert_eq!(solution.num_tours(), 2);
        assert_eq!(solution.tours()[0].nodes(), &[1]);
        assert_eq!(solution.tours()[1].nodes(), &[2, 3]);
    }
}
