//! Problem trait and a dense in-memory implementation.

use crate::distance::DistanceMatrix;

/// Defines a capacitated vehicle routing problem instance.
///
/// This trait provides the interface that solvers use to access problem
/// data: the node set, the depot, per-node demands, pairwise distances, the
/// vehicle capacity, and the fleet size. Implementations own the data; the
/// solvers only read it.
///
/// # Contract
///
/// - `distance` is symmetric and `distance(x, x) == 0`.
/// - `demand(depot_id()) == 0` and every other demand is at most
///   `capacity()` (otherwise no feasible tour can serve that customer and
///   the constructors cannot terminate).
/// - Node ids are dense: every id in `0..node_count()` is valid. Queries
///   outside that range are a caller bug and are not defended against.
///
/// # Examples
///
/// ```
/// use cvrp_heur::models::CvrpProblem;
///
/// struct Triangle;
///
/// impl CvrpProblem for Triangle {
///     fn node_count(&self) -> usize { 3 }
///     fn depot_id(&self) -> usize { 0 }
///     fn vehicle_count(&self) -> usize { 1 }
///     fn capacity(&self) -> f64 { 10.0 }
///     fn demand(&self, node: usize) -> f64 {
///         if node == 0 { 0.0 } else { 1.0 }
///     }
///     fn distance(&self, from: usize, to: usize) -> f64 {
///         if from == to { 0.0 } else { 1.0 }
///     }
/// }
///
/// let p = Triangle;
/// assert_eq!(p.node_count(), 3);
/// assert_eq!(p.distance(1, 2), p.distance(2, 1));
/// ```
pub trait CvrpProblem: Send + Sync {
    /// Number of nodes including the depot.
    fn node_count(&self) -> usize;

    /// Identifier of the depot node.
    fn depot_id(&self) -> usize;

    /// Number of vehicles available (maximum number of tours).
    fn vehicle_count(&self) -> usize;

    /// Load capacity of each vehicle (homogeneous fleet).
    fn capacity(&self) -> f64;

    /// Demand of the given node. Zero for the depot.
    fn demand(&self, node: usize) -> f64;

    /// Travel distance between two nodes.
    fn distance(&self, from: usize, to: usize) -> f64;
}

/// A [`CvrpProblem`] backed by an explicit demand vector and a
/// [`DistanceMatrix`].
///
/// This is the plain in-memory representation used throughout the test
/// suites; parsing instance files into it is a caller concern.
///
/// # Examples
///
/// ```
/// use cvrp_heur::models::{CvrpProblem, MatrixProblem};
/// use cvrp_heur::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0)]);
/// let p = MatrixProblem::new(vec![0.0, 5.0], dm, 20.0, 1).unwrap();
/// assert_eq!(p.node_count(), 2);
/// assert!((p.distance(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixProblem {
    demands: Vec<f64>,
    distances: DistanceMatrix,
    capacity: f64,
    vehicle_count: usize,
    depot_id: usize,
}

impl MatrixProblem {
    /// Creates a problem from demands, distances, capacity, and fleet size.
    ///
    /// The depot defaults to node 0. Returns `None` if the demand vector
    /// length does not match the matrix size.
    pub fn new(
        demands: Vec<f64>,
        distances: DistanceMatrix,
        capacity: f64,
        vehicle_count: usize,
    ) -> Option<Self> {
        if demands.len() != distances.size() {
            return None;
        }
        Some(Self {
            demands,
            distances,
            capacity,
            vehicle_count,
            depot_id: 0,
        })
    }

    /// Sets the depot node.
    pub fn with_depot(mut self, depot_id: usize) -> Self {
        self.depot_id = depot_id;
        self
    }
}

impl CvrpProblem for MatrixProblem {
    fn node_count(&self) -> usize {
        self.demands.len()
    }

    fn depot_id(&self) -> usize {
        self.depot_id
    }

    fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    fn capacity(&self) -> f64 {
        self.capacity
    }

    fn demand(&self, node: usize) -> f64 {
        self.demands[node]
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_problem() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]);
        let p = MatrixProblem::new(vec![0.0, 10.0, 20.0], dm, 100.0, 2).expect("valid");
        assert_eq!(p.node_count(), 3);
        assert_eq!(p.depot_id(), 0);
        assert_eq!(p.vehicle_count(), 2);
        assert_eq!(p.capacity(), 100.0);
        assert_eq!(p.demand(2), 20.0);
        assert!((p.distance(0, 1) - 5.0).abs() < 1e-10);
        assert!((p.distance(1, 0) - 5.0).abs() < 1e-10);
        assert_eq!(p.distance(1, 1), 0.0);
    }

    #[test]
    fn test_matrix_problem_size_mismatch() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(MatrixProblem::new(vec![0.0, 1.0, 2.0], dm, 10.0, 1).is_none());
    }

    #[test]
    fn test_matrix_problem_with_depot() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0)]);
        let p = MatrixProblem::new(vec![3.0, 0.0], dm, 10.0, 1)
            .expect("valid")
            .with_depot(1);
        assert_eq!(p.depot_id(), 1);
        assert_eq!(p.demand(p.depot_id()), 0.0);
    }
}
