use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use parqueens::bench::{BenchConfig, DEFAULT_RUNS, run_benchmark};
use parqueens::search::config::DEFAULT_STEPS_PER_QUEEN;
use parqueens::search::{ParallelConfig, SolverConfig, Synchronization, solve};
use parqueens::solution::{format_solution, read_solution, write_solution};
use parqueens::validation::{find_conflict, is_valid_solution};

/// Exit status when the step budget ran out without a solution.
const EXIT_UNSOLVED: i32 = 2;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "parqueens")]
#[command(about = "parqueens - parallel min-conflicts N-Queens solver")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// CLI synchronization selection
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum CliSync {
    /// Atomic conflict counters, workers decide concurrently
    #[default]
    Atomic,
    /// One lock around the board for each column decision
    Locked,
}

impl From<CliSync> for Synchronization {
    fn from(cli: CliSync) -> Self {
        match cli {
            CliSync::Atomic => Synchronization::Atomic,
            CliSync::Locked => Synchronization::Locked,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one board and report the outcome
    Solve {
        /// Board size (number of queens)
        #[arg(long, short = 'n')]
        size: usize,
        /// Maximum number of repair steps (default: 10 per queen)
        #[arg(long)]
        max_steps: Option<u64>,
        /// Number of worker threads (default: logical CPUs)
        #[arg(long, short = 'j')]
        workers: Option<usize>,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// How workers share the conflict counters
        #[arg(long, value_enum, default_value = "atomic")]
        sync: CliSync,
        /// Write the solved board to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print the solved board to stdout
        #[arg(long)]
        print: bool,
    },
    /// Solve several sizes repeatedly and report average times
    Bench {
        /// Comma-separated board sizes
        #[arg(long, value_delimiter = ',', required = true)]
        sizes: Vec<usize>,
        /// Solves per size
        #[arg(long, default_value_t = DEFAULT_RUNS)]
        runs: usize,
        /// Step budget per queen
        #[arg(long, default_value_t = DEFAULT_STEPS_PER_QUEEN)]
        steps_per_queen: u64,
        /// Number of worker threads (default: logical CPUs)
        #[arg(long, short = 'j')]
        workers: Option<usize>,
        /// Base random seed; run r uses seed + r
        #[arg(long)]
        seed: Option<u64>,
        /// How workers share the conflict counters
        #[arg(long, value_enum, default_value = "atomic")]
        sync: CliSync,
        /// Directory to write every solved board into
        #[arg(long)]
        solutions_dir: Option<PathBuf>,
    },
    /// Check a solution file
    Validate {
        /// Path to a grid of `Q` and `.` tokens
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format_timestamp(None)
    .init();
}

struct SolveOptions {
    size: usize,
    max_steps: Option<u64>,
    workers: Option<usize>,
    seed: Option<u64>,
    sync: Synchronization,
    output: Option<PathBuf>,
    print: bool,
}

/// Returns whether a solution was found.
fn run_solve(options: &SolveOptions) -> Result<bool> {
    let solver = SolverConfig::new(options.size)
        .with_max_steps_option(options.max_steps)
        .with_synchronization(options.sync);
    let parallel = ParallelConfig::default()
        .with_workers_option(options.workers)
        .with_seed_option(options.seed);

    println!("Solving n={}...", options.size);
    println!("  Workers: {}", parallel.num_workers);
    println!("  Synchronization: {}", solver.synchronization);
    println!("  Max steps: {}", solver.max_steps);
    if let Some(seed) = options.seed {
        println!("  Seed: {}", seed);
    }

    let result = solve(&solver, &parallel)
        .with_context(|| format!("failed to solve n={}", options.size))?;

    print!("\n{}", result);
    println!("\nSolve Statistics:");
    for line in result.statistics.format_summary().lines() {
        println!("  {}", line);
    }

    let Some(placement) = &result.placement else {
        return Ok(false);
    };
    if options.print {
        print!("\n{}", format_solution(placement));
    }
    if let Some(path) = &options.output {
        write_solution(path, placement)
            .with_context(|| format!("failed to write solution to {}", path.display()))?;
        println!("\nSolution written to {}", path.display());
    }
    Ok(true)
}

fn run_bench(config: &BenchConfig) -> Result<()> {
    for report in run_benchmark(config).context("benchmark failed")? {
        println!("Starting tests of size {}", report.size);
        println!(
            "  Solved: {}/{}\n  Total steps: {}",
            report.solved, report.runs, report.total_steps
        );
        println!(
            "\n AVERAGE FOR {} RANDOM n={} BOARDS: {:.3} s\n",
            report.solved,
            report.size,
            report.average_time().as_secs_f64()
        );
    }
    Ok(())
}

/// Returns whether the file holds a valid solution.
fn run_validate(path: &Path) -> Result<bool> {
    let placement =
        read_solution(path).with_context(|| format!("failed to read {}", path.display()))?;
    let valid = is_valid_solution(&placement, placement.len());
    if let Some((first, second)) = find_conflict(&placement) {
        log::info!("Queens in columns {} and {} attack each other", first, second);
    }
    println!("{}", if valid { "Valid solution" } else { "Invalid solution" });
    Ok(valid)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Solve {
            size,
            max_steps,
            workers,
            seed,
            sync,
            output,
            print,
        } => {
            let options = SolveOptions {
                size,
                max_steps,
                workers,
                seed,
                sync: sync.into(),
                output,
                print,
            };
            match run_solve(&options) {
                Ok(true) => {}
                Ok(false) => std::process::exit(EXIT_UNSOLVED),
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Bench {
            sizes,
            runs,
            steps_per_queen,
            workers,
            seed,
            sync,
            solutions_dir,
        } => {
            let parallel = ParallelConfig::default()
                .with_workers_option(workers)
                .with_seed_option(seed);
            let config = BenchConfig::new(sizes)
                .with_runs(runs)
                .with_steps_per_queen(steps_per_queen)
                .with_synchronization(sync.into())
                .with_parallel(parallel)
                .with_solutions_dir(solutions_dir);

            if let Err(e) = run_bench(&config) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        Commands::Validate { file } => match run_validate(&file) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
    }
}
