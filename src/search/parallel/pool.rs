//! Fork-join executor for repair tasks.

use rayon::{ThreadPool, ThreadPoolBuilder};

/// Split `items` into contiguous chunks of `ceil(len / parts)`.
///
/// Never yields an empty chunk, so at most `parts` chunks come back and
/// fewer when there are not enough items to go round.
pub fn partition<T>(items: &[T], parts: usize) -> std::slice::Chunks<'_, T> {
    let parts = parts.max(1);
    let chunk_size = items.len().div_ceil(parts).max(1);
    items.chunks(chunk_size)
}

/// Thread pool that runs one step's repair tasks and waits for all of them.
pub struct RepairPool {
    pool: ThreadPool,
}

impl RepairPool {
    /// Build a pool with `threads` worker threads.
    pub fn new(threads: usize) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|i| format!("repair-{i}"))
            .build()?;
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `job` once per task on the pool and return after every task
    /// has finished. Tasks run in no particular order.
    pub fn fork_join<T, F>(&self, tasks: impl IntoIterator<Item = T> + Send, job: F)
    where
        T: Send,
        F: Fn(T) + Sync,
    {
        let job = &job;
        self.pool.scope(|scope| {
            for task in tasks {
                scope.spawn(move |_| job(task));
            }
        });
    }
}

impl std::fmt::Debug for RepairPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepairPool")
            .field("threads", &self.threads())
            .finish()
    }
}
