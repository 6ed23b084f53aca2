//! Counter cells and counter arrays backing the conflict tables.
//!
//! A [`Counter`] is a single `u32` cell updated through `&self`. Two
//! implementations exist:
//! - [`AtomicU32`]: indivisible increments/decrements, shareable between
//!   worker threads without a lock.
//! - [`Cell<u32>`]: plain cells for boards that sit behind a single mutex.

use crate::error::BoardError;
use std::cell::Cell;
use std::sync::atomic::{AtomicU32, Ordering};

/// A `u32` cell with shared-reference updates.
pub trait Counter: Send {
    fn with_value(value: u32) -> Self;

    fn get(&self) -> u32;

    fn set(&self, value: u32);

    fn increment(&self);

    fn decrement(&self);
}

// Relaxed is enough: workers only need each read-modify-write to be
// indivisible. Cross-step visibility comes from the pool's join.
impl Counter for AtomicU32 {
    #[inline]
    fn with_value(value: u32) -> Self {
        AtomicU32::new(value)
    }

    #[inline]
    fn get(&self) -> u32 {
        self.load(Ordering::Relaxed)
    }

    #[inline]
    fn set(&self, value: u32) {
        self.store(value, Ordering::Relaxed);
    }

    #[inline]
    fn increment(&self) {
        self.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn decrement(&self) {
        let previous = self.fetch_sub(1, Ordering::Relaxed);
        debug_assert!(previous > 0, "conflict counter underflow");
    }
}

impl Counter for Cell<u32> {
    #[inline]
    fn with_value(value: u32) -> Self {
        Cell::new(value)
    }

    #[inline]
    fn get(&self) -> u32 {
        Cell::get(self)
    }

    #[inline]
    fn set(&self, value: u32) {
        Cell::set(self, value);
    }

    #[inline]
    fn increment(&self) {
        self.set(self.get() + 1);
    }

    #[inline]
    fn decrement(&self) {
        debug_assert!(Cell::get(self) > 0, "conflict counter underflow");
        self.set(self.get() - 1);
    }
}

/// Fixed-length array of counters.
#[derive(Debug)]
pub struct CounterArray<C> {
    cells: Box<[C]>,
}

impl<C: Counter> CounterArray<C> {
    /// Allocate `len` cells initialised to `value`.
    ///
    /// Uses fallible reservation so that an oversized board reports
    /// [`BoardError::Allocation`] instead of aborting the process.
    pub fn filled(len: usize, value: u32, board_size: usize) -> Result<Self, BoardError> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| BoardError::Allocation { size: board_size })?;
        cells.extend((0..len).map(|_| C::with_value(value)));
        Ok(Self {
            cells: cells.into_boxed_slice(),
        })
    }

    /// Allocate `len` zeroed cells.
    pub fn zeroed(len: usize, board_size: usize) -> Result<Self, BoardError> {
        Self::filled(len, 0, board_size)
    }

    #[inline]
    pub fn get(&self, index: usize) -> u32 {
        self.cells[index].get()
    }

    #[inline]
    pub fn set(&self, index: usize, value: u32) {
        self.cells[index].set(value);
    }

    #[inline]
    pub fn increment(&self, index: usize) {
        self.cells[index].increment();
    }

    #[inline]
    pub fn decrement(&self, index: usize) {
        self.cells[index].decrement();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of all cells, widened to avoid overflow on large boards.
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.get())).sum()
    }

    /// Copy of the current values.
    pub fn to_vec(&self) -> Vec<u32> {
        self.cells.iter().map(Counter::get).collect()
    }
}
