//! Board state and conflict tables
//!
//! The board stores one row per column plus three occupancy tables:
//! - rows, indexed by `row`
//! - rising diagonals, indexed by `row - col + n`
//! - falling diagonals, indexed by `row + col`
//!
//! Both diagonal tables have `2n` cells. The `+ n` offset keeps rising
//! indices non-negative; the highest falling index is `2n - 2`.

pub mod counter;
pub mod shared;
pub mod state;

pub use counter::{Counter, CounterArray};
pub use shared::{AtomicBoard, LockedBoard, SharedBoard};
pub use state::Board;

/// Largest supported board. Keeps `2n` indices and three-table cost sums
/// inside `u32`.
pub const MAX_BOARD_SIZE: usize = (u32::MAX / 4) as usize;

/// Index of the rising diagonal through `(row, col)`: `row - col + size`.
#[inline]
pub fn rising_diagonal(row: usize, col: usize, size: usize) -> usize {
    row + size - col
}

/// Index of the falling diagonal through `(row, col)`: `row + col`.
#[inline]
pub fn falling_diagonal(row: usize, col: usize) -> usize {
    row + col
}
