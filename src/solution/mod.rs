//! Text grid format for finished boards.
//!
//! One line per row, one token per column separated by a single space: `Q`
//! where the column's queen sits on that row, `.` elsewhere.
//!
//! ```text
//! . . Q .
//! Q . . .
//! . . . Q
//! . Q . .
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

const QUEEN: &str = "Q";
const EMPTY: &str = ".";

/// Errors raised while reading a solution grid.
#[derive(Debug, Error)]
pub enum SolutionError {
    #[error("no rows found")]
    Empty,

    #[error("invalid token '{token}' at row {row}, column {col}")]
    InvalidToken {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("inconsistent line length at row {row}: expected {expected} tokens, found {found}")]
    InconsistentRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("more than one queen in row {row}")]
    MultipleQueensInRow { row: usize },

    #[error("more than one queen in column {col}")]
    MultipleQueensInColumn { col: usize },

    #[error("no queen found in row {row}")]
    NoQueenInRow { row: usize },

    #[error("no queen found in column {col}")]
    NoQueenInColumn { col: usize },

    #[error("expected {expected} rows, but got {found}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Render `placement` as a grid.
pub fn format_solution(placement: &[usize]) -> String {
    let n = placement.len();
    // Two bytes per cell, the last separator of each row becomes the newline.
    let mut out = String::with_capacity(2 * n * n);
    for row in 0..n {
        push_row(&mut out, placement, row);
    }
    out
}

/// Write `placement` as a grid to `path`, replacing any existing file.
pub fn write_solution(path: impl AsRef<Path>, placement: &[usize]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let n = placement.len();
    let mut line = String::with_capacity(2 * n);
    for row in 0..n {
        line.clear();
        push_row(&mut line, placement, row);
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

fn push_row(out: &mut String, placement: &[usize], row: usize) {
    for (col, &queen_row) in placement.iter().enumerate() {
        if col > 0 {
            out.push(' ');
        }
        out.push_str(if queen_row == row { QUEEN } else { EMPTY });
    }
    out.push('\n');
}

/// File name used for the `run`-th of `total` solutions of an `n`-queens board.
pub fn solution_file_name(n: usize, run: usize, total: usize) -> String {
    format!("Solution_{n}_{run}of{total}.txt")
}

/// Parse a grid into `placement[col] = row`.
///
/// Blank lines are skipped. The board size is the token count of the first
/// non-empty line; every row must hold exactly one queen and so must every
/// column. The result is not checked for diagonal attacks.
pub fn parse_solution(text: &str) -> Result<Vec<usize>, SolutionError> {
    let mut rows = text.lines().filter(|line| !line.trim().is_empty());
    let total_rows = rows.clone().count();

    let Some(first) = rows.next() else {
        return Err(SolutionError::Empty);
    };
    let n = first.split_whitespace().count();
    let mut placement: Vec<Option<usize>> = vec![None; n];

    for (row, line) in std::iter::once(first).chain(rows).enumerate() {
        if row >= n {
            return Err(SolutionError::RowCountMismatch {
                expected: n,
                found: total_rows,
            });
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != n {
            return Err(SolutionError::InconsistentRowLength {
                row,
                expected: n,
                found: tokens.len(),
            });
        }

        let mut queen_in_row = false;
        for (col, &token) in tokens.iter().enumerate() {
            match token {
                QUEEN => {
                    if queen_in_row {
                        return Err(SolutionError::MultipleQueensInRow { row });
                    }
                    if placement[col].is_some() {
                        return Err(SolutionError::MultipleQueensInColumn { col });
                    }
                    queen_in_row = true;
                    placement[col] = Some(row);
                }
                EMPTY => {}
                _ => {
                    return Err(SolutionError::InvalidToken {
                        row,
                        col,
                        token: token.to_string(),
                    });
                }
            }
        }

        if !queen_in_row {
            return Err(SolutionError::NoQueenInRow { row });
        }
    }

    if total_rows != n {
        return Err(SolutionError::RowCountMismatch {
            expected: n,
            found: total_rows,
        });
    }

    placement
        .into_iter()
        .enumerate()
        .map(|(col, row)| row.ok_or(SolutionError::NoQueenInColumn { col }))
        .collect()
}

/// Read and parse a grid file.
pub fn read_solution(path: impl AsRef<Path>) -> Result<Vec<usize>, SolutionError> {
    let text = std::fs::read_to_string(path)?;
    parse_solution(&text)
}
