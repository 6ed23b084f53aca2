//! Parallel repair execution.
//!
//! # Architecture
//!
//! Each step the **coordinator** collects the conflicted columns of the
//! shared board, shuffles them and splits them into contiguous chunks, one per
//! **worker**. The chunks run on a **pool** built once per solve, and the
//! pool's scope joins every task before the next step starts.
//!
//! # Example
//!
//! ```ignore
//! use parqueens::search::SolverConfig;
//! use parqueens::search::parallel::{ParallelConfig, solve};
//!
//! let config = ParallelConfig::default().with_workers(4).with_seed(42);
//! let result = solve(&SolverConfig::new(1000), &config)?;
//! ```

pub mod config;
pub mod coordinator;
pub mod pool;

pub use config::ParallelConfig;
pub use coordinator::solve;
pub use pool::RepairPool;
