//! Parallel min-conflicts N-Queens solver.
//!
//! A random board is repaired in steps: every column whose queen is attacked
//! is handed to a worker, which moves the queen to a row of minimum conflict
//! cost. Workers share the board's row and diagonal counters, either through
//! atomic counters or one coarse lock.
//!
//! ```ignore
//! use parqueens::search::{ParallelConfig, SolverConfig, solve};
//!
//! let result = solve(&SolverConfig::new(8), &ParallelConfig::default())?;
//! if let Some(placement) = &result.placement {
//!     print!("{}", parqueens::solution::format_solution(placement));
//! }
//! ```

pub mod bench;
pub mod board;
pub mod error;
pub mod rng;
pub mod search;
pub mod solution;
pub mod validation;

pub use error::{BoardError, SolveError};
pub use search::{ParallelConfig, SolveResult, SolverConfig, Synchronization, solve};
