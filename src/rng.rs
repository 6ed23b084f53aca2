//! 32-bit xorshift generator used for placement, tie-breaking and shuffling.
//!
//! Every random decision in the solver is "pick one of `k` candidates",
//! computed as `next() % k`. Each worker owns its own instance, so nothing on
//! the hot path shares random state.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

/// Replacement state for a zero seed (zero is the absorbing state of xorshift).
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

/// Marsaglia xorshift32 (shifts 13, 17, 5).
///
/// Not `Copy`, so a stream is never duplicated by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator from a 32-bit seed. A zero seed is remapped.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    /// Advance the state and return it.
    #[inline]
    pub fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish index in `[0, bound)`, computed as `next() % bound`.
    ///
    /// # Panics
    /// Panics if `bound` is 0.
    #[inline]
    pub fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        (self.next() as usize) % bound
    }

    /// Fisher-Yates shuffle, walking from the back.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Current internal state (never zero).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
