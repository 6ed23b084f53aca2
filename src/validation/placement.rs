//! Pairwise N-Queens placement check.
//!
//! Works on the plain `placement[col] = row` vector only and never looks at
//! conflict tables, so it can catch counter drift in the solver.

/// Whether `placement` is a conflict-free arrangement of `size` queens.
///
/// False when the length is not `size`, when a row is outside `0..size`, or
/// when two queens share a row or a diagonal.
pub fn is_valid_solution(placement: &[usize], size: usize) -> bool {
    if placement.len() != size {
        return false;
    }
    if placement.iter().any(|&row| row >= size) {
        return false;
    }
    find_conflict(placement).is_none()
}

/// The first pair of columns `(i, j)`, `i < j`, whose queens attack each other.
pub fn find_conflict(placement: &[usize]) -> Option<(usize, usize)> {
    for (i, &row_i) in placement.iter().enumerate() {
        for (j, &row_j) in placement.iter().enumerate().skip(i + 1) {
            if row_i == row_j || row_i.abs_diff(row_j) == j - i {
                return Some((i, j));
            }
        }
    }
    None
}
