use parqueens::board::{AtomicBoard, LockedBoard, SharedBoard};
use parqueens::rng::XorShift32;
use parqueens::search::{ParallelConfig, RepairWorker, SolverConfig, Synchronization, solve};
use parqueens::solution::{
    SolutionError, format_solution, parse_solution, read_solution, write_solution,
};
use parqueens::validation::is_valid_solution;

fn solve_seeded(
    n: usize,
    steps: u64,
    workers: usize,
    seed: u64,
    sync: Synchronization,
) -> Option<Vec<usize>> {
    let solver = SolverConfig::new(n)
        .with_max_steps(steps)
        .with_synchronization(sync);
    let parallel = ParallelConfig::default()
        .with_workers(workers)
        .with_seed(seed);
    let result = solve(&solver, &parallel).expect("solve should not fail");
    assert!(result.statistics.steps <= steps);
    result.placement
}

#[test]
fn test_convergence_rate_small_boards() {
    let mut attempts = 0;
    let mut solved = 0;
    for n in 4..=50 {
        for seed in 0..4 {
            attempts += 1;
            let seed = seed * 1000 + n as u64;
            let steps = 50 * n as u64;
            if let Some(placement) = solve_seeded(n, steps, 4, seed, Synchronization::Atomic) {
                assert!(is_valid_solution(&placement, n), "invalid solution for n={n}");
                solved += 1;
            }
        }
    }
    assert!(
        solved * 10 >= attempts * 9,
        "only {solved}/{attempts} attempts converged"
    );
}

#[test]
fn test_eight_queens_single_worker_within_80_steps() {
    for sync in [Synchronization::Atomic, Synchronization::Locked] {
        let solver = SolverConfig::new(8)
            .with_max_steps(80)
            .with_synchronization(sync);
        let parallel = ParallelConfig::default().with_workers(1).with_seed(2024);
        let result = solve(&solver, &parallel).unwrap();

        assert!(result.solved, "n=8 should converge with {sync} tables");
        assert!(result.statistics.steps <= 80);
        let placement = result.placement.expect("solved result carries a placement");
        assert!(is_valid_solution(&placement, 8));
    }
}

#[test]
fn test_single_queen_converges_at_step_zero() {
    for sync in [Synchronization::Atomic, Synchronization::Locked] {
        let solver = SolverConfig::new(1).with_synchronization(sync);
        let result = solve(&solver, &ParallelConfig::default().with_seed(1)).unwrap();
        assert!(result.solved);
        assert_eq!(result.statistics.steps, 0);
        assert_eq!(result.statistics.initial_conflicts, 0);
        assert_eq!(result.placement, Some(vec![0]));
    }
}

#[test]
fn test_locked_discipline_converges() {
    let mut solved = 0;
    for seed in 0..10 {
        if let Some(placement) = solve_seeded(40, 2000, 4, seed, Synchronization::Locked) {
            assert!(is_valid_solution(&placement, 40));
            solved += 1;
        }
    }
    assert!(solved >= 8, "only {solved}/10 locked runs converged");
}

#[test]
fn test_large_board_converges() {
    let placement = solve_seeded(1000, 10_000, 4, 17, Synchronization::Atomic)
        .expect("n=1000 should converge");
    assert!(is_valid_solution(&placement, 1000));
}

/// Drive workers by hand and check the tables after every step.
fn table_sums_hold_each_step<B: SharedBoard>(shared: &B, n: usize) {
    let mut rng = XorShift32::new(12);
    let mut workers: Vec<RepairWorker> = (0..3)
        .map(|id| RepairWorker::new(id, XorShift32::new(100 + id as u32)))
        .collect();

    for _ in 0..200 {
        let mut columns = shared.acquire().conflicted_columns();
        if columns.is_empty() {
            break;
        }
        rng.shuffle(&mut columns);
        let chunk = columns.len().div_ceil(workers.len());
        std::thread::scope(|s| {
            for (slice, worker) in columns.chunks(chunk).zip(workers.iter_mut()) {
                s.spawn(move || worker.repair(shared, slice));
            }
        });
        let n = n as u64;
        assert_eq!(shared.acquire().table_sums(), (n, n, n));
    }
}

#[test]
fn test_table_sums_hold_under_both_disciplines() {
    let mut rng = XorShift32::new(3);
    table_sums_hold_each_step(&AtomicBoard::random(64, &mut rng).unwrap(), 64);
    table_sums_hold_each_step(&LockedBoard::random(64, &mut rng).unwrap(), 64);
}

#[test]
fn test_solution_round_trip() {
    let placement =
        solve_seeded(20, 2000, 2, 5, Synchronization::Atomic).expect("n=20 should converge");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Solution_20_0of1.txt");
    write_solution(&path, &placement).unwrap();

    let read_back = read_solution(&path).unwrap();
    assert_eq!(read_back, placement);
    assert!(is_valid_solution(&read_back, 20));
    assert_eq!(parse_solution(&format_solution(&placement)).unwrap(), placement);
}

#[test]
fn test_four_by_four_with_shared_row_rejected() {
    // Queens in columns 0 and 2 both on row 0, which leaves row 1 empty.
    let grid = "Q . Q .\n. . . .\n. . . Q\n. Q . .\n";
    assert!(matches!(
        parse_solution(grid),
        Err(SolutionError::MultipleQueensInRow { row: 0 })
    ));

    // The same board as a placement fails validation.
    let placement = vec![0, 3, 0, 2];
    assert!(!is_valid_solution(&placement, 4));
}
