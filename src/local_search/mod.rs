//! Local search operators for improving CVRP solutions.
//!
//! - [`two_opt_improve`] — Intra-tour 2-opt edge reversal
//! - [`relocate_improve`] — Inter-tour customer relocation
//! - [`exchange_improve`] — Inter-tour customer exchange
//! - [`descent`] — All three in priority order until convergence
//!
//! Every operator mutates the solution in place, never commits a move that
//! violates capacity, and uses a first-improvement strategy: the scan
//! restarts after each committed move, so total distance decreases
//! monotonically.

mod descent;
mod exchange;
mod relocate;
mod two_opt;

pub use descent::{descent, MAX_DESCENT_ROUNDS};
pub use exchange::exchange_improve;
pub use relocate::relocate_improve;
pub use two_opt::two_opt_improve;
