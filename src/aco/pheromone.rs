//! Symmetric pheromone storage.

/// Pheromone values over unordered node pairs.
///
/// Stored as a flat lower-triangular array indexed by the canonical pair
/// `(min, max)`, so `get(a, b) == get(b, a)` by construction. Every entry
/// starts at the baseline `t0` and is pulled back toward it by
/// [`evaporate`](PheromoneMatrix::evaporate).
///
/// # Examples
///
/// ```
/// use cvrp_heur::aco::PheromoneMatrix;
///
/// let mut ph = PheromoneMatrix::new(4, 0.5);
/// assert_eq!(ph.get(1, 3), 0.5);
/// ph.reinforce(3, 1, 0.2, 2.0);
/// assert!((ph.get(1, 3) - 0.8).abs() < 1e-10);
/// assert_eq!(ph.get(1, 3), ph.get(3, 1));
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    values: Vec<f64>,
    size: usize,
    baseline: f64,
}

impl PheromoneMatrix {
    /// Creates a matrix over `size` nodes, every pair initialized to `t0`.
    pub fn new(size: usize, t0: f64) -> Self {
        let pairs = size * size.saturating_sub(1) / 2;
        Self {
            values: vec![t0; pairs],
            size,
            baseline: t0,
        }
    }

    /// Number of nodes this matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Pheromone value of the unordered pair `{a, b}`.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either id is out of range.
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.values[self.index(a, b)]
    }

    /// Reinforces the pair `{a, b}`:
    /// `value = (1 - alpha) * value + alpha * deposit`.
    pub fn reinforce(&mut self, a: usize, b: usize, alpha: f64, deposit: f64) {
        let idx = self.index(a, b);
        self.values[idx] = (1.0 - alpha) * self.values[idx] + alpha * deposit;
    }

    /// Decays every pair toward the baseline:
    /// `value = (1 - alpha) * value + alpha * t0`.
    pub fn evaporate(&mut self, alpha: f64) {
        for value in &mut self.values {
            *value = (1.0 - alpha) * *value + alpha * self.baseline;
        }
    }

    fn index(&self, a: usize, b: usize) -> usize {
        debug_assert!(a != b, "pheromone pairs are between distinct nodes");
        debug_assert!(a < self.size && b < self.size);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        hi * (hi - 1) / 2 + lo
    }
}
