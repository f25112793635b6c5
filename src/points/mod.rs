//! Seed point generation.
//!
//! Partitioning takes its seed points from a [`PointGenerator`] so callers can
//! inject their own randomness. Both generators here are driven by a
//! `ChaCha8Rng` seeded explicitly: the same seed always yields the same points.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::metric::Point;

/// Errors that can occur while generating points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    #[error("Cannot place points in an empty {0}x{1} area")]
    EmptyBounds(usize, usize),
    #[error("Requested {requested} distinct points but only {cells} cells exist")]
    TooManyPoints { requested: usize, cells: usize },
    #[error("Requested {requested} fixed points but only {available} were given")]
    NotEnoughFixedPoints { requested: usize, available: usize },
    #[error("Point {index} at ({x}, {y}) lies outside the {width}x{height} area")]
    OutOfBounds {
        index: usize,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Source of seed points with `x` in `[0, width)` and `y` in `[0, height)`.
pub trait PointGenerator {
    /// Produces exactly `count` points inside the given bounds.
    fn generate(
        &mut self,
        count: usize,
        width: usize,
        height: usize,
    ) -> Result<Vec<Point>, PointError>;
}

/// Uniform points sampled with replacement. Two seeds may land on the same cell.
#[derive(Debug, Clone)]
pub struct UniformPointGenerator {
    rng: ChaCha8Rng,
}

impl UniformPointGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl PointGenerator for UniformPointGenerator {
    fn generate(
        &mut self,
        count: usize,
        width: usize,
        height: usize,
    ) -> Result<Vec<Point>, PointError> {
        if width == 0 || height == 0 {
            return Err(PointError::EmptyBounds(width, height));
        }
        Ok((0..count)
            .map(|_| {
                let x = self.rng.random_range(0..width);
                let y = self.rng.random_range(0..height);
                Point::new(x as i32, y as i32)
            })
            .collect())
    }
}

/// Uniform points sampled without replacement: every point occupies its own cell.
#[derive(Debug, Clone)]
pub struct DistinctPointGenerator {
    rng: ChaCha8Rng,
}

impl DistinctPointGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl PointGenerator for DistinctPointGenerator {
    fn generate(
        &mut self,
        count: usize,
        width: usize,
        height: usize,
    ) -> Result<Vec<Point>, PointError> {
        if width == 0 || height == 0 {
            return Err(PointError::EmptyBounds(width, height));
        }
        let cells = width * height;
        if count > cells {
            return Err(PointError::TooManyPoints { requested: count, cells });
        }
        Ok(index::sample(&mut self.rng, cells, count)
            .into_iter()
            .map(|i| Point::new((i % width) as i32, (i / width) as i32))
            .collect())
    }
}

/// Replays a fixed list of points. Useful for reproducing a known layout.
///
/// Hands out the first `count` points as given. Points outside the requested
/// area are an error, never wrapped or clamped.
#[derive(Debug, Clone)]
pub struct FixedPoints(pub Vec<Point>);

impl PointGenerator for FixedPoints {
    fn generate(
        &mut self,
        count: usize,
        width: usize,
        height: usize,
    ) -> Result<Vec<Point>, PointError> {
        if width == 0 || height == 0 {
            return Err(PointError::EmptyBounds(width, height));
        }
        let Some(points) = self.0.get(..count) else {
            return Err(PointError::NotEnoughFixedPoints {
                requested: count,
                available: self.0.len(),
            });
        };

        let inside =
            |p: &Point| (0..width as i32).contains(&p.x) && (0..height as i32).contains(&p.y);
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !inside(p)) {
            return Err(PointError::OutOfBounds {
                index,
                x: p.x,
                y: p.y,
                width,
                height,
            });
        }
        Ok(points.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uniform_points_in_bounds() {
        let mut sampler = UniformPointGenerator::new(7);
        let points = sampler.generate(500, 13, 5).unwrap();
        assert_eq!(points.len(), 500);
        assert!(points.iter().all(|p| (0..13).contains(&p.x) && (0..5).contains(&p.y)));
    }

    #[test]
    fn test_same_seed_same_points() {
        let a = UniformPointGenerator::new(99).generate(32, 40, 20).unwrap();
        let b = UniformPointGenerator::new(99).generate(32, 40, 20).unwrap();
        let c = UniformPointGenerator::new(100).generate(32, 40, 20).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_distinct_points_are_unique() {
        let mut sampler = DistinctPointGenerator::new(3);
        let points = sampler.generate(16, 4, 4).unwrap();
        let unique: HashSet<(i32, i32)> = points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_distinct_points_reject_overflow() {
        let mut sampler = DistinctPointGenerator::new(3);
        assert_eq!(
            sampler.generate(17, 4, 4),
            Err(PointError::TooManyPoints { requested: 17, cells: 16 })
        );
    }

    #[test]
    fn test_empty_bounds() {
        assert_eq!(
            UniformPointGenerator::new(0).generate(1, 0, 4),
            Err(PointError::EmptyBounds(0, 4))
        );
    }

    #[test]
    fn test_fixed_points_replay() {
        let mut sampler = FixedPoints(vec![Point::new(1, 1), Point::new(3, 0), Point::new(2, 2)]);
        let points = sampler.generate(2, 4, 4).unwrap();
        assert_eq!(points, vec![Point::new(1, 1), Point::new(3, 0)]);
        assert_eq!(
            sampler.generate(4, 4, 4),
            Err(PointError::NotEnoughFixedPoints { requested: 4, available: 3 })
        );
    }

    #[test]
    fn test_fixed_points_outside_bounds_are_rejected() {
        let mut sampler = FixedPoints(vec![Point::new(1, 1), Point::new(5, 0)]);
        assert_eq!(
            sampler.generate(2, 4, 4),
            Err(PointError::OutOfBounds { index: 1, x: 5, y: 0, width: 4, height: 4 })
        );

        let mut sampler = FixedPoints(vec![Point::new(0, -1)]);
        assert!(matches!(sampler.generate(1, 4, 4), Err(PointError::OutOfBounds { index: 0, .. })));
    }
}
