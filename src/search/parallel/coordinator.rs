//! Step loop that drives repair workers over a shared board.

use crate::board::{AtomicBoard, LockedBoard, SharedBoard};
use crate::error::SolveError;
use crate::rng::XorShift32;
use crate::search::config::{SolverConfig, Synchronization};
use crate::search::parallel::config::{ParallelConfig, orchestrator_rng, worker_rng};
use crate::search::parallel::pool::{RepairPool, partition};
use crate::search::repair::RepairWorker;
use crate::search::result::{SolveResult, SolveStatistics};
use crate::validation::find_conflict;
use std::time::Instant;

/// How the step loop ended.
enum Termination {
    Solved(Vec<usize>),
    Exhausted { conflicts: usize },
}

/// Solve one board with the given configuration.
///
/// Running out of steps is an `Ok` result with `solved == false`.
pub fn solve(
    solver_config: &SolverConfig,
    parallel_config: &ParallelConfig,
) -> Result<SolveResult, SolveError> {
    if solver_config.max_steps == 0 {
        return Err(SolveError::InvalidConfig(
            "max_steps must be at least 1".to_string(),
        ));
    }

    let seed = parallel_config.resolve_seed();
    if parallel_config.base_seed.is_none() {
        log::info!("No seed given, using {seed}");
    }

    let num_workers = parallel_config.num_workers.max(1);
    let pool = RepairPool::new(num_workers)?;
    let mut workers: Vec<RepairWorker> = (0..num_workers)
        .map(|id| RepairWorker::new(id, worker_rng(seed, id)))
        .collect();
    let mut stats = SolveStatistics::new(solver_config.synchronization, num_workers, seed);

    log::debug!(
        "Solving n={} with {} workers ({} tables), max_steps={}",
        solver_config.size,
        num_workers,
        solver_config.synchronization,
        solver_config.max_steps
    );

    let start_time = Instant::now();
    let mut rng = orchestrator_rng(seed);
    let termination = match solver_config.synchronization {
        Synchronization::Atomic => {
            let board = AtomicBoard::random(solver_config.size, &mut rng)?;
            run_repair_loop(
                &board,
                &pool,
                &mut workers,
                &mut rng,
                solver_config.max_steps,
                &mut stats,
            )
        }
        Synchronization::Locked => {
            let board = LockedBoard::random(solver_config.size, &mut rng)?;
            run_repair_loop(
                &board,
                &pool,
                &mut workers,
                &mut rng,
                solver_config.max_steps,
                &mut stats,
            )
        }
    };
    stats.elapsed_time = start_time.elapsed();

    stats.worker_repairs = workers.iter().map(RepairWorker::statistics).collect();
    for worker_stats in &stats.worker_repairs {
        stats.repairs.merge(worker_stats);
    }

    match termination? {
        Termination::Solved(placement) => {
            log::info!(
                "Solved n={} in {:.3?} after {} steps",
                solver_config.size,
                stats.elapsed_time,
                stats.steps
            );
            Ok(SolveResult::solved(placement, stats))
        }
        Termination::Exhausted { conflicts } => {
            stats.final_conflicts = conflicts;
            log::info!(
                "Gave up on n={} after {} steps with {} conflicted columns",
                solver_config.size,
                stats.steps,
                conflicts
            );
            Ok(SolveResult::exhausted(solver_config.size, stats))
        }
    }
}

/// Collect, check, partition, dispatch and join until solved or out of steps.
fn run_repair_loop<B: SharedBoard>(
    shared: &B,
    pool: &RepairPool,
    workers: &mut [RepairWorker],
    rng: &mut XorShift32,
    max_steps: u64,
    stats: &mut SolveStatistics,
) -> Result<Termination, SolveError> {
    let mut step: u64 = 0;
    loop {
        let mut columns = shared.acquire().conflicted_columns();
        if step == 0 {
            stats.initial_conflicts = columns.len();
        }
        stats.steps = step;

        if columns.is_empty() {
            let placement = shared.acquire().placement();
            if let Some((first, second)) = find_conflict(&placement) {
                log::error!(
                    "Conflict tables are clear but columns {first} and {second} attack each other"
                );
                return Err(SolveError::InconsistentSolution { first, second });
            }
            return Ok(Termination::Solved(placement));
        }

        if step == max_steps {
            return Ok(Termination::Exhausted {
                conflicts: columns.len(),
            });
        }

        log::debug!("Step {step}: {} conflicted columns", columns.len());

        rng.shuffle(&mut columns);
        let tasks = partition(&columns, workers.len()).zip(workers.iter_mut());
        pool.fork_join(tasks, |(chunk, worker)| worker.repair(shared, chunk));

        step += 1;
    }
}
