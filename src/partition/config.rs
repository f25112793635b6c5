//! Region partition configuration.

use serde::{Deserialize, Serialize};

/// Parameters for building a Voronoi-style region partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Grid width in cells. The world wraps on this axis.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Cells per seed point: `num_points = width * height / density`.
    pub density: usize,
    /// Seed for the point generator.
    pub seed: u64,
    /// Sample seed points without replacement so no two seeds share a cell.
    /// With replacement, a seed landing on an earlier seed's cell claims nothing.
    pub distinct_points: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            density: 64,
            seed: 42,
            distinct_points: true,
        }
    }
}

impl PartitionConfig {
    pub fn new(width: usize, height: usize, density: usize) -> Self {
        Self {
            width,
            height,
            density,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_distinct_points(mut self, distinct: bool) -> Self {
        self.distinct_points = distinct;
        self
    }

    /// Number of seed points implied by the density, or 0 for a zero density.
    pub fn num_points(&self) -> usize {
        if self.density == 0 {
            return 0;
        }
        (self.width * self.height) / self.density
    }
}
