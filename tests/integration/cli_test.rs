use std::path::Path;
use std::process::{Command, Output};

fn parqueens(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parqueens"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute parqueens")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path should be UTF-8")
}

#[test]
fn test_solve_prints_board() {
    let output = parqueens(&[
        "solve",
        "--size",
        "8",
        "--max-steps",
        "800",
        "-j",
        "2",
        "--seed",
        "7",
        "--print",
    ]);
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = stdout(&output);
    assert!(stdout.contains("Solution found for n=8"));
    assert!(stdout.contains("Solve Statistics:"));
    assert!(stdout.contains("  Workers: 2"));
    assert!(stdout.contains("  Conflicted columns: "));
    assert!(stdout.contains("  Relocations: "));

    let grid: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("Q") || line.starts_with(". "))
        .collect();
    assert_eq!(grid.len(), 8, "Expected 8 board rows in:\n{}", stdout);
    assert!(grid.iter().all(|line| line.matches('Q').count() == 1));
}

#[test]
fn test_solve_output_accepted_by_validate() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("solution.txt");

    let output = parqueens(&[
        "solve",
        "--size",
        "30",
        "--max-steps",
        "3000",
        "--sync",
        "locked",
        "--seed",
        "11",
        "--output",
        path_arg(&file),
    ]);
    assert!(output.status.success(), "solve failed: {:?}", output);
    assert!(file.exists());

    let output = parqueens(&["validate", path_arg(&file)]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Valid solution");
}

#[test]
fn test_validate_rejects_attacking_queens() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("diagonal.txt");
    std::fs::write(&file, "Q . . .\n. Q . .\n. . Q .\n. . . Q\n").unwrap();

    let output = parqueens(&["validate", path_arg(&file)]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "Invalid solution");
}

#[test]
fn test_validate_reports_malformed_grid() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("malformed.txt");
    std::fs::write(&file, ". Q . .\nQ . Q .\n. . . Q\n. . . .\n").unwrap();

    let output = parqueens(&["validate", path_arg(&file)]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("more than one queen in row 1"),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_validate_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = parqueens(&["validate", path_arg(&dir.path().join("nope.txt"))]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn test_solve_unsolvable_board() {
    let output = parqueens(&["solve", "--size", "3", "--max-steps", "20", "--seed", "1"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("No solution found for n=3 in 20 steps"));
}

#[test]
fn test_solve_rejects_zero_steps() {
    let output = parqueens(&["solve", "--size", "8", "--max-steps", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("max_steps"));
}

#[test]
fn test_bench_writes_solutions() {
    let dir = tempfile::tempdir().unwrap();
    let output = parqueens(&[
        "bench",
        "--sizes",
        "1,8",
        "--runs",
        "2",
        "--steps-per-queen",
        "100",
        "--seed",
        "3",
        "-j",
        "2",
        "--solutions-dir",
        path_arg(dir.path()),
    ]);
    assert!(output.status.success(), "bench failed: {:?}", output);

    let stdout = stdout(&output);
    assert!(stdout.contains("AVERAGE FOR"));
    assert!(stdout.contains("n=8"));
    assert!(dir.path().join("Solution_1_0of2.txt").exists());
    assert!(dir.path().join("Solution_1_1of2.txt").exists());
}

#[test]
fn test_unknown_sync_rejected() {
    let output = parqueens(&["solve", "--size", "8", "--sync", "spin"]);
    assert!(!output.status.success());
}
