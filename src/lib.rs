//! Grids for an x-wrapping 2D world.
//!
//! This crate builds three kinds of map from a few seed parameters:
//! Voronoi-style region partitions, height-aware distance-to-water fields, and
//! biome maps derived from those fields and per-row temperatures.

pub mod grid;
pub mod metric;
pub mod points;
pub mod partition;
pub mod water;
pub mod biomes;

pub use grid::{BitGrid, Grid, GridError, IntGrid};
pub use metric::{
    find_closest, find_closest_toroidal, squared_distance, toroidal_squared_distance, Point,
};
pub use points::{DistinctPointGenerator, PointError, PointGenerator, UniformPointGenerator};
pub use partition::{
    build_region_partition, build_region_partition_with, partition_from_points, PartitionConfig,
    PartitionError,
};
pub use water::{
    build_looped_water_distance_field, build_water_distance_field, WaterDistance,
    WaterDistanceGrid,
};
pub use biomes::{
    build_biomes, build_biomes_from_heights, Biome, BiomeConfig, BiomeError, BiomeGrid,
    TemperatureProfile,
};
