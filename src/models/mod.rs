//! Domain model types for the capacitated vehicle routing problem.
//!
//! Provides the core abstractions: a problem trait exposing demands,
//! distances, vehicle capacity and fleet size; tours as ordered customer
//! sequences with cached load; and solutions as collections of tours.

mod problem;
mod solution;
mod tour;

pub use problem::{CvrpProblem, MatrixProblem};
pub use solution::Solution;
pub use tour::Tour;
