//! Ant colony optimization constructor.
//!
//! An ant colony system in the style of Dorigo & Gambardella (1997), adapted
//! to the CVRP: each ant builds one composite path through all customers,
//! returning to the depot whenever the next customer would not fit the
//! remaining vehicle capacity. Depot returns delimit the tours of the
//! resulting solution.
//!
//! - [`AcoParams`] — Run parameters with sensible defaults
//! - [`AntColony`] — The solver; see [`AntColony::run`]
//! - [`PheromoneMatrix`] — Symmetric pair-keyed desirability values

mod ant;
mod colony;
mod pheromone;

pub use colony::{AcoParams, AntColony};
pub use pheromone::PheromoneMatrix;

pub(crate) use ant::Ant;
