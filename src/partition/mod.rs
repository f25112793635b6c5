//! Voronoi-style region partition of an x-wrapping grid.
//!
//! Labels cells with the index of their nearest seed point under
//! [`toroidal_squared_distance`](crate::metric::toroidal_squared_distance),
//! using a region-bounded flood fill per seed instead of a nearest-seed scan
//! for every cell. A seed only claims cells it can reach through cells it
//! already won, so a cell keeps an earlier label when no such path exists.

mod config;
mod fill;

pub use config::PartitionConfig;
pub use fill::{fill_partition, fill_seed, normalize_labels, Direction, Visit};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::grid::{GridError, IntGrid};
use crate::metric::Point;
use crate::points::{DistinctPointGenerator, PointError, PointGenerator, UniformPointGenerator};

/// Errors that can occur while building a partition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("Density must be positive, got {0}")]
    InvalidDensity(usize),
    #[error("A {width}x{height} grid at density {density} yields no seed points")]
    TooFewPoints {
        width: usize,
        height: usize,
        density: usize,
    },
    #[error("Seed point {index} at ({x}, {y}) lies outside the grid")]
    SeedOutOfBounds { index: usize, x: i32, y: i32 },
    #[error("At least one seed point is required")]
    NoSeeds,
    #[error("Point generation failed: {0}")]
    Points(#[from] PointError),
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

/// Labels a `width x height` grid with 0-based indices into `seeds`.
///
/// Seeds must lie inside the grid. Seed 0 owns every cell no later seed claims.
pub fn partition_from_points(
    width: usize,
    height: usize,
    seeds: &[Point],
) -> Result<IntGrid, PartitionError> {
    if width == 0 || height == 0 {
        return Err(GridError::Empty(width, height).into());
    }
    if seeds.is_empty() {
        return Err(PartitionError::NoSeeds);
    }
    if let Some((index, p)) = seeds
        .iter()
        .enumerate()
        .find(|(_, p)| p.x < 0 || p.y < 0 || p.x as usize >= width || p.y as usize >= height)
    {
        return Err(PartitionError::SeedOutOfBounds { index, x: p.x, y: p.y });
    }

    let mut labels = fill_partition(width, height, seeds);
    normalize_labels(&mut labels);
    Ok(labels)
}

/// Builds a partition with `width * height / density` seeds drawn from `generator`.
#[instrument(skip(generator))]
pub fn build_region_partition_with<G>(
    width: usize,
    height: usize,
    density: usize,
    generator: &mut G,
) -> Result<IntGrid, PartitionError>
where
    G: PointGenerator + ?Sized,
{
    if density == 0 {
        return Err(PartitionError::InvalidDensity(density));
    }
    let num_points = (width * height) / density;
    if num_points < 1 {
        return Err(PartitionError::TooFewPoints { width, height, density });
    }

    let seeds = generator.generate(num_points, width, height)?;
    debug!(num_points, "generated seed points");
    partition_from_points(width, height, &seeds)
}

/// Builds a partition from a [`PartitionConfig`], seeding the point generator
/// from `config.seed`.
pub fn build_region_partition(config: &PartitionConfig) -> Result<IntGrid, PartitionError> {
    let (w, h, d) = (config.width, config.height, config.density);
    if config.distinct_points {
        build_region_partition_with(w, h, d, &mut DistinctPointGenerator::new(config.seed))
    } else {
        build_region_partition_with(w, h, d, &mut UniformPointGenerator::new(config.seed))
    }
}
