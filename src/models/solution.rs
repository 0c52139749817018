//! Solution type.

use serde::{Deserialize, Serialize};

use super::{CvrpProblem, Tour};

/// A complete solution to a CVRP instance: an ordered collection of tours.
///
/// Once construction completes, every customer appears in exactly one tour
/// across the whole solution. Feasibility additionally requires each tour to
/// respect the vehicle capacity and the number of tours to respect the fleet
/// size; see [`Solution::is_feasible`].
///
/// # Examples
///
/// ```
/// use cvrp_heur::models::{Solution, Tour};
///
/// let mut sol = Solution::new();
/// let mut tour = Tour::new();
/// tour.push(1, 10.0);
/// sol.add_tour(tour);
/// assert_eq!(sol.num_tours(), 1);
/// assert_eq!(sol.num_served(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    tours: Vec<Tour>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self { tours: Vec::new() }
    }

    /// Adds a tour to this solution.
    pub fn add_tour(&mut self, tour: Tour) {
        self.tours.push(tour);
    }

    /// Returns the tours in this solution.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Returns a mutable reference to the tours.
    pub fn tours_mut(&mut self) -> &mut Vec<Tour> {
        &mut self.tours
    }

    /// Returns the number of tours (vehicles used).
    pub fn num_tours(&self) -> usize {
        self.tours.len()
    }

    /// Total number of customers served across all tours.
    pub fn num_served(&self) -> usize {
        self.tours.iter().map(|t| t.len()).sum()
    }

    /// Total travel distance across all tours, depot legs included.
    pub fn total_cost<P: CvrpProblem>(&self, problem: &P) -> f64 {
        self.tours.iter().map(|t| t.distance(problem)).sum()
    }

    /// Returns `true` if every tour respects the vehicle capacity and the
    /// number of tours does not exceed the fleet size.
    pub fn is_feasible<P: CvrpProblem>(&self, problem: &P) -> bool {
        self.tours.len() <= problem.vehicle_count()
            && self
                .tours
                .iter()
                .all(|t| t.used_capacity() <= problem.capacity())
    }

    /// Returns `true` if every customer appears in exactly one tour.
    pub fn covers_all_customers<P: CvrpProblem>(&self, problem: &P) -> bool {
        let mut seen = vec![false; problem.node_count()];
        for tour in &self.tours {
            for &node in tour.nodes() {
                if node == problem.depot_id() || seen[node] {
                    return false;
                }
                seen[node] = true;
            }
        }
        seen.iter()
            .enumerate()
            .all(|(node, &s)| s || node == problem.depot_id())
    }
}
