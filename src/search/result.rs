//! Solve result types and statistics

use crate::search::config::Synchronization;
use std::time::Duration;

/// Outcome of one solve attempt
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Board dimension
    pub size: usize,
    /// Whether a conflict-free placement was reached within the step budget
    pub solved: bool,
    /// The validated placement (`placement[col] = row`), when solved
    pub placement: Option<Vec<usize>>,
    /// Statistics from the solve
    pub statistics: SolveStatistics,
}

impl SolveResult {
    /// A solved result carrying its validated placement
    pub fn solved(placement: Vec<usize>, statistics: SolveStatistics) -> Self {
        Self {
            size: placement.len(),
            solved: true,
            placement: Some(placement),
            statistics,
        }
    }

    /// The step budget ran out with conflicts remaining
    pub fn exhausted(size: usize, statistics: SolveStatistics) -> Self {
        Self {
            size,
            solved: false,
            placement: None,
            statistics,
        }
    }
}

/// Per-worker repair counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStatistics {
    /// Columns handed to the worker
    pub columns_examined: u64,
    /// Columns found conflict-free by the time the worker reached them
    pub columns_skipped: u64,
    /// Columns whose queen moved to a different row
    pub relocations: u64,
    /// Decisions where more than one row shared the minimum cost
    pub tied_choices: u64,
}

impl WorkerStatistics {
    pub fn merge(&mut self, other: &WorkerStatistics) {
        self.columns_examined += other.columns_examined;
        self.columns_skipped += other.columns_skipped;
        self.relocations += other.relocations;
        self.tied_choices += other.tied_choices;
    }
}

/// Statistics from a solve attempt
#[derive(Debug, Clone, Default)]
pub struct SolveStatistics {
    /// Synchronization discipline used
    pub synchronization: Synchronization,
    /// Number of repair workers
    pub workers: usize,
    /// Base seed every generator was derived from
    pub seed: u64,
    /// Repair rounds executed
    pub steps: u64,
    /// Wall-clock time from board construction to termination
    pub elapsed_time: Duration,
    /// Conflicted columns on the initial board
    pub initial_conflicts: usize,
    /// Conflicted columns at termination
    pub final_conflicts: usize,
    /// Repair counters summed over all workers
    pub repairs: WorkerStatistics,
    /// Per-worker repair counters, indexed by worker id
    pub worker_repairs: Vec<WorkerStatistics>,
}

impl SolveStatistics {
    pub fn new(synchronization: Synchronization, workers: usize, seed: u64) -> Self {
        Self {
            synchronization,
            workers,
            seed,
            ..Default::default()
        }
    }

    /// Repair rounds per second
    pub fn steps_per_second(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.steps as f64 / secs
        }
    }

    /// Fraction of examined columns that ended up moving
    pub fn relocation_rate(&self) -> f64 {
        if self.repairs.columns_examined == 0 {
            0.0
        } else {
            self.repairs.relocations as f64 / self.repairs.columns_examined as f64
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Synchronization: {}\n", self.synchronization));
        s.push_str(&format!("Workers: {}\n", self.workers));
        s.push_str(&format!("Seed: {}\n", self.seed));
        s.push_str(&format!("Time: {:.3?}\n", self.elapsed_time));
        s.push_str(&format!(
            "Steps: {} ({} worker-steps)\n",
            self.steps,
            self.steps * self.workers as u64
        ));
        s.push_str(&format!(
            "Conflicted columns: {} -> {}\n",
            self.initial_conflicts, self.final_conflicts
        ));
        s.push_str(&format!(
            "Columns examined: {}\n",
            self.repairs.columns_examined
        ));
        s.push_str(&format!(
            "Columns skipped: {}\n",
            self.repairs.columns_skipped
        ));
        s.push_str(&format!("Relocations: {}\n", self.repairs.relocations));
        if self.repairs.columns_examined > 0 {
            s.push_str(&format!(
                "Relocation rate: {:.2}%\n",
                self.relocation_rate() * 100.0
            ));
        }
        if self.steps > 0 {
            s.push_str(&format!(
                "Steps per second: {:.1}\n",
                self.steps_per_second()
            ));
        }
        s
    }
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.solved {
            writeln!(
                f,
                "Solution found for n={} in {:.3} seconds after {} steps",
                self.size,
                self.statistics.elapsed_time.as_secs_f64(),
                self.statistics.steps
            )
        } else {
            writeln!(
                f,
                "No solution found for n={} in {} steps ({} conflicted columns left)",
                self.size, self.statistics.steps, self.statistics.final_conflicts
            )
        }
    }
}
