//! Generic dense grid and the integer grid built on it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GridError;

/// A fixed-size `width x height` grid stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Grid of signed integers (labels, heights).
pub type IntGrid = Grid<i32>;

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Builds a grid from row vectors. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GridError::Empty(width, height));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self { width, height, cells })
    }

    /// Overwrites every cell with `value`, keeping the allocation.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Materializes the grid as owned rows for callers that want `values[row][col]`.
    pub fn values(&self) -> Vec<Vec<T>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Returns a new grid with `f` applied to every cell.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f(row, col)` for every cell in row-major order.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(width: usize, height: usize, mut f: F) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns true if `other` has the same width and height.
    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Fails with [`GridError::DimensionMismatch`] unless both grids share a shape.
    pub fn check_same_shape<U>(&self, other: &Grid<U>) -> Result<(), GridError> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(GridError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            })
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let i = self.index(row, col);
        &mut self.cells[i]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let i = self.index(row, col);
        self.cells[i] = value;
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Iterates cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }
}

impl IntGrid {
    /// Creates a zeroed integer grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    /// Adds `delta` to the value at `(row, col)`.
    #[inline]
    pub fn delta(&mut self, row: usize, col: usize, delta: i32) {
        *self.get_mut(row, col) += delta;
    }

    /// Adds `delta` to every cell.
    pub fn delta_all(&mut self, delta: i32) {
        for v in &mut self.cells {
            *v += delta;
        }
    }
}

/// Elementwise sum of two integer grids of identical shape.
pub fn add(a: &IntGrid, b: &IntGrid) -> Result<IntGrid, GridError> {
    a.check_same_shape(b)?;
    Ok(Grid {
        width: a.width,
        height: a.height,
        cells: a.cells.iter().zip(&b.cells).map(|(x, y)| x + y).collect(),
    })
}

/// Renders one row per line with cells separated by single spaces.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for v in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
