//! # cvrp-heur
//!
//! Heuristic solvers for the Capacitated Vehicle Routing Problem (CVRP):
//! partition customers into capacity-bounded, depot-rooted tours so that the
//! fleet size is respected and total travel distance is minimized.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Tour, Solution, CvrpProblem trait)
//! - [`distance`] — Symmetric distance matrix
//! - [`constructive`] — Bin-packing constructor (farthest-first insertion)
//! - [`aco`] — Ant colony optimization constructor
//! - [`local_search`] — Local search operators (2-opt, Relocate, Exchange) and descent
//!
//! ## Usage
//!
//! ```
//! use cvrp_heur::models::MatrixProblem;
//! use cvrp_heur::distance::DistanceMatrix;
//! use cvrp_heur::constructive::get_feasible;
//! use cvrp_heur::local_search::descent;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let points = [(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];
//! let dm = DistanceMatrix::from_points(&points);
//! let problem = MatrixProblem::new(vec![0.0, 4.0, 4.0, 4.0], dm, 10.0, 2).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut solution = get_feasible(&problem, &mut rng, 1000).expect("fleet-feasible");
//! descent(&mut solution, &problem);
//!
//! assert!(solution.is_feasible(&problem));
//! assert!(solution.covers_all_customers(&problem));
//! ```

pub mod aco;
pub mod constructive;
pub mod distance;
pub mod local_search;
pub mod models;
