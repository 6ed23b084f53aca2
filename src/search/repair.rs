//! Min-conflicts column repair
//!
//! A worker walks its slice of conflicted columns in order. For each column
//! that is still conflicted it scans every row, keeps the rows with the
//! lowest occupancy cost and moves the queen to one of them at random.

use crate::board::{Board, Counter, SharedBoard};
use crate::rng::XorShift32;
use crate::search::result::WorkerStatistics;

/// What happened to one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRepair {
    /// The column had no conflict when the worker reached it
    Skipped,
    /// The best row was the queen's current row
    Stayed { row: usize },
    /// The queen moved
    Moved { from: usize, to: usize },
}

/// One repair worker: its generator, scratch buffer and counters persist
/// across steps.
#[derive(Debug, Clone)]
pub struct RepairWorker {
    id: usize,
    rng: XorShift32,
    best_rows: Vec<usize>,
    statistics: WorkerStatistics,
}

impl RepairWorker {
    pub fn new(id: usize, rng: XorShift32) -> Self {
        Self {
            id,
            rng,
            best_rows: Vec::new(),
            statistics: WorkerStatistics::default(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn statistics(&self) -> WorkerStatistics {
        self.statistics
    }

    /// Repair `columns` sequentially, one board acquisition per column.
    pub fn repair<B: SharedBoard>(&mut self, shared: &B, columns: &[usize]) {
        for &col in columns {
            let board = shared.acquire();
            let outcome = self.repair_column(&*board, col);
            drop(board);

            self.statistics.columns_examined += 1;
            match outcome {
                ColumnRepair::Skipped => self.statistics.columns_skipped += 1,
                ColumnRepair::Stayed { .. } => {}
                ColumnRepair::Moved { .. } => self.statistics.relocations += 1,
            }
        }
    }

    /// Check, scan and relocate a single column.
    pub fn repair_column<C: Counter>(&mut self, board: &Board<C>, col: usize) -> ColumnRepair {
        if !board.has_conflict(col) {
            return ColumnRepair::Skipped;
        }

        let from = board.row_of(col);
        let to = self.choose_row(board, col);
        if to == from {
            return ColumnRepair::Stayed { row: from };
        }
        board.relocate(col, to);
        ColumnRepair::Moved { from, to }
    }

    /// Pick uniformly among the rows of minimum cost for `col`.
    fn choose_row<C: Counter>(&mut self, board: &Board<C>, col: usize) -> usize {
        self.best_rows.clear();
        // Starts above any reachable cost so the best set is never empty.
        let mut min_cost = u32::MAX;

        for row in 0..board.size() {
            let cost = board.cost(col, row);
            if cost < min_cost {
                min_cost = cost;
                self.best_rows.clear();
                self.best_rows.push(row);
            } else if cost == min_cost {
                self.best_rows.push(row);
            }
        }

        if self.best_rows.len() > 1 {
            self.statistics.tied_choices += 1;
        }
        self.best_rows[self.rng.below(self.best_rows.len())]
    }
}
