//! Synchronization disciplines for sharing one board between repair workers.
//!
//! Workers never touch a [`Board`] directly; they call
//! [`SharedBoard::acquire`] once per column decision and work through the
//! returned guard:
//! - [`AtomicBoard`]: the guard is a plain reference, counters are atomic,
//!   decisions run concurrently (cost reads may be stale).
//! - [`LockedBoard`]: the guard is a mutex guard over a board with plain
//!   cells, decisions are serialized.

use crate::board::counter::Counter;
use crate::board::state::Board;
use crate::error::BoardError;
use crate::rng::XorShift32;
use std::cell::Cell;
use std::ops::Deref;
use std::sync::atomic::AtomicU32;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A board that several repair workers can use at once.
pub trait SharedBoard: Sync {
    type Cells: Counter;

    type Guard<'a>: Deref<Target = Board<Self::Cells>>
    where
        Self: 'a;

    /// Access the board for one check-scan-relocate decision.
    fn acquire(&self) -> Self::Guard<'_>;
}

/// Lock-free board: atomic conflict tables shared by all workers.
#[derive(Debug)]
pub struct AtomicBoard {
    board: Board<AtomicU32>,
}

impl AtomicBoard {
    pub fn random(size: usize, rng: &mut XorShift32) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::random(size, rng)?,
        })
    }

    pub fn from_placement(placement: &[usize]) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::from_placement(placement)?,
        })
    }
}

impl SharedBoard for AtomicBoard {
    type Cells = AtomicU32;
    type Guard<'a> = &'a Board<AtomicU32>;

    #[inline]
    fn acquire(&self) -> Self::Guard<'_> {
        &self.board
    }
}

/// Coarse-locked board: one mutex around a board with plain counters.
#[derive(Debug)]
pub struct LockedBoard {
    board: Mutex<Board<Cell<u32>>>,
}

impl LockedBoard {
    pub fn random(size: usize, rng: &mut XorShift32) -> Result<Self, BoardError> {
        Ok(Self {
            board: Mutex::new(Board::random(size, rng)?),
        })
    }

    pub fn from_placement(placement: &[usize]) -> Result<Self, BoardError> {
        Ok(Self {
            board: Mutex::new(Board::from_placement(placement)?),
        })
    }
}

impl SharedBoard for LockedBoard {
    type Cells = Cell<u32>;
    type Guard<'a> = MutexGuard<'a, Board<Cell<u32>>>;

    fn acquire(&self) -> Self::Guard<'_> {
        // A panicking worker already propagates out of the pool scope.
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
