//! Configuration for parallel repair execution.

use crate::rng::XorShift32;
use rand::SeedableRng;

/// Configuration for parallel repair execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of repair workers (and pool threads).
    pub num_workers: usize,
    /// Base random seed (workers get seed + worker_id + 1).
    pub base_seed: Option<u64>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get().max(1),
            base_seed: None,
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel config with the specified number of workers.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the worker count from an Option, keeping the default when None.
    pub fn with_workers_option(self, num_workers: Option<usize>) -> Self {
        match num_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }

    /// Set the base random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Set the base random seed from an Option.
    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.base_seed = seed;
        self
    }

    /// The configured seed, or a fresh one from the thread-local generator.
    pub fn resolve_seed(&self) -> u64 {
        self.base_seed.unwrap_or_else(rand::random)
    }
}

/// Generator used by the orchestrator (initial placement and shuffling).
pub fn orchestrator_rng(base_seed: u64) -> XorShift32 {
    XorShift32::seed_from_u64(base_seed)
}

/// Independent generator for worker `worker_id`.
pub fn worker_rng(base_seed: u64, worker_id: usize) -> XorShift32 {
    XorShift32::seed_from_u64(base_seed.wrapping_add(worker_id as u64 + 1))
}
