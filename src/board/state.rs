//! Placement plus the three conflict-count tables.

use crate::board::counter::{Counter, CounterArray};
use crate::board::{MAX_BOARD_SIZE, falling_diagonal, rising_diagonal};
use crate::error::BoardError;
use crate::rng::XorShift32;

/// One queen per column, with row and diagonal occupancy counts.
///
/// All mutation goes through [`Board::relocate`], which takes `&self`: the
/// counter cell type `C` decides whether concurrent relocations are safe
/// (`AtomicU32`) or must be serialized by the caller (`Cell<u32>`).
#[derive(Debug)]
pub struct Board<C> {
    size: usize,
    placement: CounterArray<C>,
    rows: CounterArray<C>,
    rising: CounterArray<C>,
    falling: CounterArray<C>,
}

impl<C: Counter> Board<C> {
    /// Place one queen per column on a row drawn as `rng.next() % size`.
    pub fn random(size: usize, rng: &mut XorShift32) -> Result<Self, BoardError> {
        let board = Self::empty(size)?;
        for col in 0..size {
            let row = rng.below(size);
            board.place(col, row);
        }
        Ok(board)
    }

    /// Build a board from an explicit `placement[col] = row` assignment.
    pub fn from_placement(placement: &[usize]) -> Result<Self, BoardError> {
        let size = placement.len();
        let board = Self::empty(size)?;
        for (col, &row) in placement.iter().enumerate() {
            if row >= size {
                return Err(BoardError::RowOutOfRange { col, row, size });
            }
            board.place(col, row);
        }
        Ok(board)
    }

    fn empty(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardError::TooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            placement: CounterArray::zeroed(size, size)?,
            rows: CounterArray::zeroed(size, size)?,
            rising: CounterArray::zeroed(2 * size, size)?,
            falling: CounterArray::zeroed(2 * size, size)?,
        })
    }

    // Only used while building; the placement cell starts unset.
    fn place(&self, col: usize, row: usize) {
        self.placement.set(col, row as u32);
        self.add_queen(col, row);
    }

    #[inline]
    fn add_queen(&self, col: usize, row: usize) {
        self.rows.increment(row);
        self.rising.increment(rising_diagonal(row, col, self.size));
        self.falling.increment(falling_diagonal(row, col));
    }

    #[inline]
    fn remove_queen(&self, col: usize, row: usize) {
        self.rows.decrement(row);
        self.rising.decrement(rising_diagonal(row, col, self.size));
        self.falling.decrement(falling_diagonal(row, col));
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row of the queen in `col`.
    #[inline]
    pub fn row_of(&self, col: usize) -> usize {
        self.placement.get(col) as usize
    }

    /// True iff the queen in `col` shares its row or a diagonal with another queen.
    #[inline]
    pub fn has_conflict(&self, col: usize) -> bool {
        let row = self.row_of(col);
        self.rows.get(row) > 1
            || self.rising.get(rising_diagonal(row, col, self.size)) > 1
            || self.falling.get(falling_diagonal(row, col)) > 1
    }

    /// Occupancy of the row and both diagonals through `(row, col)`.
    ///
    /// When `row` is the queen's current row its own three contributions
    /// are included, so the current row is scored 3 higher than an empty
    /// square would be and the queen stays only when every other row is
    /// at least that crowded.
    ///
    /// Under concurrent relocation the three loads are independent and may
    /// observe different moments.
    #[inline]
    pub fn cost(&self, col: usize, row: usize) -> u32 {
        self.rows.get(row)
            + self.rising.get(rising_diagonal(row, col, self.size))
            + self.falling.get(falling_diagonal(row, col))
    }

    /// Move the queen in `col` to `new_row`.
    ///
    /// The old counts are decremented, the placement written, then the new
    /// counts incremented. The placement cell of `col` must only be written
    /// by one caller at a time; the counter cells may be shared.
    pub fn relocate(&self, col: usize, new_row: usize) {
        debug_assert!(new_row < self.size, "row {new_row} out of range");
        let old_row = self.row_of(col);
        if old_row == new_row {
            return;
        }
        self.remove_queen(col, old_row);
        self.placement.set(col, new_row as u32);
        self.add_queen(col, new_row);
    }

    /// Columns whose queen is currently in conflict, in column order.
    pub fn conflicted_columns(&self) -> Vec<usize> {
        (0..self.size).filter(|&col| self.has_conflict(col)).collect()
    }

    /// Number of conflicted columns.
    pub fn conflict_count(&self) -> usize {
        (0..self.size).filter(|&col| self.has_conflict(col)).count()
    }

    /// Snapshot of `placement[col] = row`.
    pub fn placement(&self) -> Vec<usize> {
        (0..self.size).map(|col| self.row_of(col)).collect()
    }

    /// Sums of the row, rising-diagonal and falling-diagonal tables.
    ///
    /// Each equals `size` whenever no relocation is in flight.
    pub fn table_sums(&self) -> (u64, u64, u64) {
        (self.rows.sum(), self.rising.sum(), self.falling.sum())
    }
}
