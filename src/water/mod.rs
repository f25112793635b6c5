//! Height-aware distance to the nearest water cell.
//!
//! Two raster sweeps over a 4-connected neighborhood, first top-left to
//! bottom-right through north/west neighbors, then back through south/east.
//! Planar hop count (`xy`) and accumulated climb (`z`) are relaxed
//! independently, so a cell's `xy` and `z` may come from different water cells.
//! Cells reachable from water only by a diagonal-heavy path can end up with
//! larger values than a full 8-connected transform would give.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::grid::{add, Grid, GridError, IntGrid};

/// Distance from one cell to the nearest water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WaterDistance {
    /// Steps across the grid.
    pub xy: i32,
    /// Height change accumulated along the way.
    pub z: i32,
}

impl WaterDistance {
    /// The distance of a water cell to itself.
    pub const WATER: Self = Self { xy: 0, z: 0 };

    pub const fn new(xy: i32, z: i32) -> Self {
        Self { xy, z }
    }

    /// `xy + z`. Only used to rank distances.
    #[inline]
    pub const fn magnitude(self) -> i32 {
        self.xy + self.z
    }
}

impl fmt::Display for WaterDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.xy, self.z)
    }
}

pub type WaterDistanceGrid = Grid<WaterDistance>;

impl Grid<WaterDistance> {
    /// Folds a width-`2k` field to width `k`, keeping whichever of `(row, col)`
    /// and `(row, col + k)` has the smaller magnitude. Ties keep the right half.
    pub fn minfold(&self) -> Result<WaterDistanceGrid, GridError> {
        let width = self.width();
        if width % 2 != 0 {
            return Err(GridError::OddWidth(width));
        }
        let half = width / 2;
        Ok(Grid::from_fn(half, self.height(), |row, col| {
            let left = *self.get(row, col);
            let right = *self.get(row, col + half);
            if left.magnitude() < right.magnitude() {
                left
            } else {
                right
            }
        }))
    }
}

/// Concatenates every row with itself, doubling the width.
pub fn double_width<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let width = grid.width();
    Grid::from_fn(width * 2, grid.height(), |row, col| grid.get(row, col % width).clone())
}

/// Value stored in land cells before the sweeps. Never exceeded afterwards.
fn unreached(width: usize, height: usize) -> i32 {
    (width + height + 1) as i32
}

/// Relaxes `cell` against the given already-swept neighbors.
#[inline]
fn relax(
    field: &mut WaterDistanceGrid,
    totals: &IntGrid,
    cell: (usize, usize),
    neighbors: [Option<(usize, usize)>; 2],
) {
    let (row, col) = cell;
    let here = *totals.get(row, col);
    let mut best = *field.get(row, col);

    for (nrow, ncol) in neighbors.into_iter().flatten() {
        let from = *field.get(nrow, ncol);
        let climb = (here - *totals.get(nrow, ncol)).abs();
        best.xy = best.xy.min(from.xy + 1);
        best.z = best.z.min(from.z + climb);
    }

    field.set(row, col, best);
}

/// Computes the distance from every cell to the nearest cell with `water > 0`.
///
/// `land` and `water` must share a shape. Heights are compared on `land + water`.
#[instrument(skip_all, fields(width = land.width(), height = land.height()))]
pub fn build_water_distance_field(
    land: &IntGrid,
    water: &IntGrid,
) -> Result<WaterDistanceGrid, GridError> {
    let totals = add(land, water)?;
    let (width, height) = land.dimensions();
    let far = unreached(width, height);

    let mut field = Grid::from_fn(width, height, |row, col| {
        if *water.get(row, col) > 0 {
            WaterDistance::WATER
        } else {
            WaterDistance::new(far, far)
        }
    });

    for row in 0..height {
        for col in 0..width {
            let north = (row > 0).then(|| (row - 1, col));
            let west = (col > 0).then(|| (row, col - 1));
            relax(&mut field, &totals, (row, col), [north, west]);
        }
    }

    for row in (0..height).rev() {
        for col in (0..width).rev() {
            let south = (row + 1 < height).then(|| (row + 1, col));
            let east = (col + 1 < width).then(|| (row, col + 1));
            relax(&mut field, &totals, (row, col), [south, east]);
        }
    }

    debug!(
        water_cells = field.iter().filter(|d| **d == WaterDistance::WATER).count(),
        "water distance field complete"
    );
    Ok(field)
}

/// Like [`build_water_distance_field`], but water across the east/west seam
/// counts as near.
///
/// Runs on both grids doubled in width and min-folds the result back.
pub fn build_looped_water_distance_field(
    land: &IntGrid,
    water: &IntGrid,
) -> Result<WaterDistanceGrid, GridError> {
    land.check_same_shape(water)?;
    let field = build_water_distance_field(&double_width(land), &double_width(water))?;
    debug!(fold_width = land.width(), "folding looped water distance field");
    field.minfold()
}
