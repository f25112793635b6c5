//! End-to-end checks of the three map builders through the public API.

use std::collections::HashSet;

use planetgrid::biomes::{build_biomes, Biome};
use planetgrid::grid::IntGrid;
use planetgrid::partition::{build_region_partition, build_region_partition_with, PartitionConfig};
use planetgrid::points::{DistinctPointGenerator, PointGenerator, UniformPointGenerator};
use planetgrid::water::{build_water_distance_field, WaterDistance};
use planetgrid::{
    build_biomes_from_heights, find_closest_toroidal, BiomeConfig, Point, TemperatureProfile,
};

#[test]
fn partition_labels_cover_the_grid() {
    let config = PartitionConfig::new(32, 16, 8).with_seed(7).with_distinct_points(true);
    let labels = build_region_partition(&config).unwrap();

    assert_eq!(labels.dimensions(), (32, 16));
    let seen: HashSet<i32> = labels.iter().copied().collect();
    assert_eq!(seen, (0..config.num_points() as i32).collect());
}

#[test]
fn default_partition_uses_every_label() {
    let mut incomplete = Vec::new();
    for seed in 0..64 {
        let config = PartitionConfig::new(4, 4, 4).with_seed(seed);
        let labels = build_region_partition(&config).unwrap();
        let seen: HashSet<i32> = labels.iter().copied().collect();
        if seen.len() != 4 {
            incomplete.push(seed);
        }
    }
    assert!(incomplete.is_empty(), "seeds missing a label: {incomplete:?}");
}

#[test]
fn two_seed_partition_matches_nearest_seed_scan() {
    // Regenerate the same seeds the builder drew, then spot-check against a scan.
    let mut points = DistinctPointGenerator::new(11);
    let labels = build_region_partition_with(20, 10, 100, &mut points).unwrap();

    let seeds = DistinctPointGenerator::new(11).generate(2, 20, 10).unwrap();
    for row in 0..10 {
        for col in 0..20 {
            let cell = Point::new(col as i32, row as i32);
            let nearest = find_closest_toroidal(cell, &seeds, 20).unwrap();
            assert_eq!(*labels.get(row, col), nearest as i32, "cell ({row}, {col})");
        }
    }
}

#[test]
fn same_seed_same_partition() {
    let a = build_region_partition_with(40, 20, 10, &mut UniformPointGenerator::new(5)).unwrap();
    let b = build_region_partition_with(40, 20, 10, &mut UniformPointGenerator::new(5)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn lake_to_biomes() {
    // A 1-cell lake in the middle of flat land, warm everywhere.
    let land = IntGrid::filled(9, 9, 2);
    let mut water = IntGrid::new(9, 9);
    water.set(4, 4, 3);

    let field = build_water_distance_field(&land, &water).unwrap();
    assert_eq!(*field.get(4, 4), WaterDistance::WATER);
    // The lake surface sits 3 above the land around it.
    assert_eq!(*field.get(4, 5), WaterDistance::new(1, 3));
    assert_eq!(*field.get(0, 0), WaterDistance::new(8, 3));

    let biomes = build_biomes(&field, &[90.0; 9], 10).unwrap();
    assert_eq!(*biomes.get(4, 4), Biome::Beach);
    assert_eq!(*biomes.get(4, 6), Biome::Beach);
    assert_eq!(*biomes.get(4, 8), Biome::TROPICAL);
    assert_eq!(*biomes.get(0, 0), Biome::DESERT);
}

#[test]
fn heights_to_biomes_wraps_by_default() {
    // Water on the east edge only; the west edge is one step away across the seam.
    let land = IntGrid::filled(12, 3, 1);
    let mut water = IntGrid::new(12, 3);
    for row in 0..3 {
        water.set(row, 11, 1);
    }
    let temperatures = TemperatureProfile::Kelvin(vec![290.0; 3]);

    let looped =
        build_biomes_from_heights(&land, &water, &temperatures, &BiomeConfig::default()).unwrap();
    let bounded =
        build_biomes_from_heights(&land, &water, &temperatures, &BiomeConfig::bounded()).unwrap();

    assert_eq!(*looped.get(1, 0), Biome::Beach);
    assert_eq!(*bounded.get(1, 0), Biome::LUSH);
}
