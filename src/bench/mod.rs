//! Repeated solves across board sizes.

use crate::error::SolveError;
use crate::search::config::{DEFAULT_STEPS_PER_QUEEN, SolverConfig, Synchronization};
use crate::search::parallel::{ParallelConfig, solve};
use crate::solution::{solution_file_name, write_solution};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default number of solves per board size.
pub const DEFAULT_RUNS: usize = 5;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("failed to write solution to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Board sizes, run in order
    pub sizes: Vec<usize>,
    /// Solves per size
    pub runs: usize,
    /// Step budget per queen (`max_steps = steps_per_queen * n`)
    pub steps_per_queen: u64,
    pub synchronization: Synchronization,
    /// Worker count and base seed; run `r` uses `base_seed + r`
    pub parallel: ParallelConfig,
    /// Where to write solved boards, if anywhere
    pub solutions_dir: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: Vec::new(),
            runs: DEFAULT_RUNS,
            steps_per_queen: DEFAULT_STEPS_PER_QUEEN,
            synchronization: Synchronization::default(),
            parallel: ParallelConfig::default(),
            solutions_dir: None,
        }
    }
}

impl BenchConfig {
    pub fn new(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            ..Default::default()
        }
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_steps_per_queen(mut self, steps_per_queen: u64) -> Self {
        self.steps_per_queen = steps_per_queen;
        self
    }

    pub fn with_synchronization(mut self, synchronization: Synchronization) -> Self {
        self.synchronization = synchronization;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_solutions_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.solutions_dir = dir;
        self
    }
}

/// Aggregate over all runs of one board size
#[derive(Debug, Clone, Default)]
pub struct SizeReport {
    pub size: usize,
    pub runs: usize,
    pub solved: usize,
    /// Wall-clock time summed over solved runs
    pub total_time: Duration,
    /// Steps summed over all runs
    pub total_steps: u64,
}

impl SizeReport {
    /// Mean solve time over solved runs, zero when nothing was solved.
    pub fn average_time(&self) -> Duration {
        match u32::try_from(self.solved) {
            Ok(0) => Duration::ZERO,
            Ok(solved) => self.total_time / solved,
            Err(_) => self.total_time.div_f64(self.solved as f64),
        }
    }
}

impl std::fmt::Display for SizeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={}: solved {}/{}, average {:.3} s over solved runs, {} steps total",
            self.size,
            self.solved,
            self.runs,
            self.average_time().as_secs_f64(),
            self.total_steps
        )
    }
}

/// Solve every configured size `runs` times.
pub fn run_benchmark(config: &BenchConfig) -> Result<Vec<SizeReport>, BenchError> {
    let mut reports = Vec::with_capacity(config.sizes.len());

    for &size in &config.sizes {
        log::info!("Starting {} runs of size {}", config.runs, size);
        let solver = SolverConfig::new(size)
            .with_steps_per_queen(config.steps_per_queen)
            .with_synchronization(config.synchronization);
        let mut report = SizeReport {
            size,
            runs: config.runs,
            ..Default::default()
        };

        for run in 0..config.runs {
            let seed = config.parallel.base_seed.map(|base| base.wrapping_add(run as u64));
            let parallel = config.parallel.clone().with_seed_option(seed);
            let result = solve(&solver, &parallel)?;

            report.total_steps += result.statistics.steps;
            log::debug!("n={} run {}: {}", size, run, result.to_string().trim_end());

            let Some(placement) = &result.placement else {
                continue;
            };
            report.solved += 1;
            report.total_time += result.statistics.elapsed_time;

            if let Some(dir) = &config.solutions_dir {
                let path = dir.join(solution_file_name(size, run, config.runs));
                write_solution(&path, placement)
                    .map_err(|source| BenchError::Write { path, source })?;
            }
        }

        log::info!("{report}");
        reports.push(report);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_time() {
        let report = SizeReport {
            size: 8,
            runs: 4,
            solved: 2,
            total_time: Duration::from_millis(30),
            total_steps: 100,
        };
        assert_eq!(report.average_time(), Duration::from_millis(15));

        let report = SizeReport {
            solved: 0,
            ..report
        };
        assert_eq!(report.average_time(), Duration::ZERO);
    }

    #[test]
    fn test_bench_config_builder() {
        let config = BenchConfig::new(vec![8, 16])
            .with_runs(3)
            .with_steps_per_queen(50)
            .with_synchronization(Synchronization::Locked);
        assert_eq!(config.sizes, vec![8, 16]);
        assert_eq!(config.runs, 3);
        assert_eq!(config.steps_per_queen, 50);
        assert_eq!(config.synchronization, Synchronization::Locked);
        assert!(config.solutions_dir.is_none());
    }

    #[test]
    fn test_run_benchmark_reports_each_size() {
        let config = BenchConfig::new(vec![1, 8])
            .with_runs(3)
            .with_steps_per_queen(50)
            .with_parallel(ParallelConfig::default().with_workers(2).with_seed(7));
        let reports = run_benchmark(&config).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].size, 1);
        assert_eq!(reports[0].solved, 3);
        assert_eq!(reports[0].total_steps, 0);
        assert_eq!(reports[1].size, 8);
        assert_eq!(reports[1].runs, 3);
        assert!(reports[1].solved <= 3);
    }

    #[test]
    fn test_run_benchmark_writes_solutions() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig::new(vec![1])
            .with_runs(2)
            .with_parallel(ParallelConfig::default().with_workers(1).with_seed(1))
            .with_solutions_dir(Some(dir.path().to_path_buf()));
        run_benchmark(&config).unwrap();

        for run in 0..2 {
            let path = dir.path().join(solution_file_name(1, run, 2));
            assert_eq!(std::fs::read_to_string(path).unwrap(), "Q\n");
        }
    }

    #[test]
    fn test_run_benchmark_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig::new(vec![1])
            .with_runs(1)
            .with_solutions_dir(Some(dir.path().join("missing")));
        let err = run_benchmark(&config).unwrap_err();
        assert!(matches!(err, BenchError::Write { .. }));
    }

    #[test]
    fn test_run_benchmark_propagates_solve_errors() {
        let config = BenchConfig::new(vec![4]).with_steps_per_queen(0);
        let err = run_benchmark(&config).unwrap_err();
        assert!(matches!(err, BenchError::Solve(SolveError::InvalidConfig(_))));
    }
}
