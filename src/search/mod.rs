//! Min-conflicts search for N-Queens placements
//!
//! - `repair`: the per-column min-conflicts move made by each worker
//! - `parallel`: the step loop that fans conflicted columns out to workers
//! - `config` / `result`: solver settings and outcomes

pub mod config;
pub mod parallel;
pub mod repair;
pub mod result;

pub use config::{SolverConfig, Synchronization};
pub use parallel::{ParallelConfig, solve};
pub use repair::{ColumnRepair, RepairWorker};
pub use result::{SolveResult, SolveStatistics, WorkerStatistics};
