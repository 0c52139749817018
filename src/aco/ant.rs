//! Per-iteration ant state.

use crate::models::CvrpProblem;

/// One stochastic constructive walk. Lives for a single colony iteration.
///
/// The path records every step including depot returns, so splitting it at
/// depot occurrences recovers the individual tours. `visited` counts the
/// starting depot plus each distinct customer committed so far; depot
/// returns do not increment it.
#[derive(Debug, Clone)]
pub(crate) struct Ant {
    pub(crate) position: usize,
    pub(crate) remaining_capacity: f64,
    pub(crate) visited: usize,
    pub(crate) path: Vec<usize>,
    pub(crate) distance: f64,
    seen: Vec<bool>,
}

impl Ant {
    pub(crate) fn new<P: CvrpProblem>(problem: &P) -> Self {
        let mut ant = Self {
            position: 0,
            remaining_capacity: 0.0,
            visited: 0,
            path: Vec::new(),
            distance: 0.0,
            seen: vec![false; problem.node_count()],
        };
        ant.reset(problem);
        ant
    }

    /// Puts the ant back at the depot with full capacity and an empty path.
    pub(crate) fn reset<P: CvrpProblem>(&mut self, problem: &P) {
        self.position = problem.depot_id();
        self.remaining_capacity = problem.capacity();
        self.visited = 1;
        self.path.clear();
        self.path.push(self.position);
        self.distance = 0.0;
        self.seen.fill(false);
    }

    /// Returns `true` if the customer is already on the path.
    pub(crate) fn has_seen(&self, node: usize) -> bool {
        self.seen[node]
    }

    /// Commits a customer: travel there, consume its demand.
    pub(crate) fn visit(&mut self, node: usize, demand: f64, travel: f64) {
        self.distance += travel;
        self.remaining_capacity -= demand;
        self.position = node;
        self.visited += 1;
        self.path.push(node);
        self.seen[node] = true;
    }

    /// Forces a return to the depot, refilling the vehicle. Models starting
    /// a new route; does not count as a visit.
    pub(crate) fn return_to_depot<P: CvrpProblem>(&mut self, problem: &P) {
        let depot = problem.depot_id();
        self.distance += problem.distance(self.position, depot);
        self.position = depot;
        self.remaining_capacity = problem.capacity();
        self.path.push(depot);
    }
}
