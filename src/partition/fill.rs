//! Region-bounded flood fill for Voronoi labeling on an x-wrapping grid.
//!
//! Each seed grows outward from its own cell and stops wherever an earlier
//! seed is closer, so work per seed is bounded by the size of its cell instead
//! of the whole grid.

use tracing::trace;

use crate::grid::{BitGrid, IntGrid};
use crate::metric::{find_closest_toroidal, Point};

/// Direction of the step that led into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Neighbor of `p` in this direction. East/west wrap modulo `width`;
    /// north/south return `None` at the top and bottom rows.
    pub fn step(self, p: Point, width: i32, height: i32) -> Option<Point> {
        match self {
            Direction::North if p.y > 0 => Some(Point::new(p.x, p.y - 1)),
            Direction::South if p.y < height - 1 => Some(Point::new(p.x, p.y + 1)),
            Direction::East => Some(Point::new((p.x + 1).rem_euclid(width), p.y)),
            Direction::West => Some(Point::new((p.x - 1).rem_euclid(width), p.y)),
            _ => None,
        }
    }
}

/// A pending visit: the cell and the direction taken to reach it (`None` for the seed).
pub type Visit = (Point, Option<Direction>);

/// Flood-fills seed `index` into `labels`.
///
/// Every visited cell gets `winner + 1`, where `winner` is the closest of
/// `seeds[..=index]`. Growth continues only through cells the seed itself wins.
/// `visited` must be clear on entry; `stack` is scratch space reused across calls.
///
/// Returns the number of cells the seed claimed.
pub fn fill_seed(
    labels: &mut IntGrid,
    visited: &mut BitGrid,
    seeds: &[Point],
    index: usize,
    stack: &mut Vec<Visit>,
) -> usize {
    let width = labels.width() as i32;
    let height = labels.height() as i32;
    let candidates = &seeds[..=index];
    let label = index as i32 + 1;
    let mut claimed = 0;

    stack.clear();
    stack.push((seeds[index], None));

    while let Some((p, arrived)) = stack.pop() {
        let (row, col) = (p.y as usize, p.x as usize);
        if visited.test_and_set(row, col) {
            continue;
        }

        let Some(winner) = find_closest_toroidal(p, candidates, width) else {
            continue;
        };
        let winner_label = winner as i32 + 1;
        labels.set(row, col, winner_label);
        if winner_label != label {
            continue;
        }
        claimed += 1;

        let back = arrived.map(Direction::opposite);
        // Reversed so north is explored first.
        for dir in Direction::ALL.into_iter().rev() {
            if Some(dir) == back {
                continue;
            }
            if let Some(next) = dir.step(p, width, height) {
                stack.push((next, Some(dir)));
            }
        }
    }

    trace!(seed = index, claimed, "seed fill complete");
    claimed
}

/// Labels a `width x height` grid with 1-based seed labels.
///
/// Every cell starts as label 1, the territory of seed 0, which never runs a
/// fill of its own. Seeds `1..n` then fill in order, reusing one visited grid.
pub fn fill_partition(width: usize, height: usize, seeds: &[Point]) -> IntGrid {
    let mut labels = IntGrid::filled(width, height, 1);
    let mut visited = BitGrid::new(width, height);
    let mut stack = Vec::new();

    for index in 1..seeds.len() {
        fill_seed(&mut labels, &mut visited, seeds, index, &mut stack);
        visited.clear();
    }

    labels
}

/// Shifts labels from 1-based to 0-based so they match seed indices.
pub fn normalize_labels(labels: &mut IntGrid) {
    labels.delta_all(-1);
}
