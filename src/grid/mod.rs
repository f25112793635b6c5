//! Dense row-major grids.
//!
//! Every grid in the crate addresses cells as `(row, col)` and flattens them as
//! `row * width + col`. Raw offsets are never exposed.

mod bits;
mod dense;

pub use bits::BitGrid;
pub use dense::{add, Grid, IntGrid};

use thiserror::Error;

/// Errors raised when grid operands have unusable shapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Dimension mismatch: {left:?} vs {right:?} (width, height)")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("Cannot fold a grid of odd width {0}")]
    OddWidth(usize),
    #[error("Grid has zero area ({0}x{1})")]
    Empty(usize, usize),
    #[error("Ragged rows: row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
