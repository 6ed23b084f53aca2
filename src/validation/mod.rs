//! Independent checks for finished placements

pub mod placement;

pub use placement::{find_conflict, is_valid_solution};
