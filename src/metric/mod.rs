//! Squared distances on a flat and an x-wrapping grid.
//!
//! All distances are squared grid-cell units. Nothing here takes a square root;
//! callers only compare magnitudes.

use glam::IVec2;

/// Integer grid coordinate. `x` is the column, `y` the row.
pub type Point = IVec2;

/// `(p.x - q.x)^2 + (p.y - q.y)^2`, widened to `i64`.
#[inline]
pub fn squared_distance(p: Point, q: Point) -> i64 {
    (p - q).as_i64vec2().length_squared()
}

/// Squared distance on a world that wraps on x with period `width`.
///
/// Compares `p` as given and shifted one period east and west, and returns the
/// smallest of the three. `y` never wraps.
#[inline]
pub fn toroidal_squared_distance(p: Point, q: Point, width: i32) -> i64 {
    let shift = IVec2::new(width, 0);
    let direct = squared_distance(p, q);
    let beyond = squared_distance(p + shift, q);
    let behind = squared_distance(p - shift, q);
    direct.min(beyond).min(behind)
}

/// Index of the candidate closest to `p` under `metric`.
///
/// Scans in ascending index order and keeps the first minimum, so equidistant
/// candidates resolve to the lowest index. Returns `None` for an empty slice.
pub fn find_closest<F>(p: Point, candidates: &[Point], metric: F) -> Option<usize>
where
    F: Fn(Point, Point) -> i64,
{
    let mut best: Option<(usize, i64)> = None;
    for (i, &q) in candidates.iter().enumerate() {
        let d = metric(q, p);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// [`find_closest`] with [`toroidal_squared_distance`] for a world of `width` columns.
#[inline]
pub fn find_closest_toroidal(p: Point, candidates: &[Point], width: i32) -> Option<usize> {
    find_closest(p, candidates, |a, b| toroidal_squared_distance(a, b, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance(Point::new(0, 0), Point::new(3, 4)), 25);
        assert_eq!(squared_distance(Point::new(-2, 5), Point::new(-2, 5)), 0);
    }

    #[test]
    fn test_toroidal_distance_crosses_the_seam() {
        // Columns 0 and 9 are neighbors on a 10-wide world.
        let a = Point::new(0, 3);
        let b = Point::new(9, 3);
        assert_eq!(squared_distance(a, b), 81);
        assert_eq!(toroidal_squared_distance(a, b, 10), 1);
    }

    #[test]
    fn test_toroidal_distance_does_not_wrap_y() {
        let a = Point::new(2, 0);
        let b = Point::new(2, 9);
        assert_eq!(toroidal_squared_distance(a, b, 10), 81);
    }

    #[test]
    fn test_find_closest_prefers_first_on_ties() {
        let p = Point::new(5, 5);
        let candidates = [Point::new(9, 9), Point::new(4, 5), Point::new(6, 5), Point::new(5, 4)];
        assert_eq!(find_closest(p, &candidates, squared_distance), Some(1));
    }

    #[test]
    fn test_find_closest_empty() {
        assert_eq!(find_closest(Point::ZERO, &[], squared_distance), None);
    }

    #[test]
    fn test_find_closest_toroidal_uses_wraparound() {
        let p = Point::new(0, 0);
        let candidates = [Point::new(4, 0), Point::new(15, 0)];
        assert_eq!(find_closest(p, &candidates, squared_distance), Some(0));
        assert_eq!(find_closest_toroidal(p, &candidates, 16), Some(1));
    }

    proptest! {
        #[test]
        fn prop_self_distance_is_zero(x in -1000i32..1000, y in -1000i32..1000, w in 1i32..500) {
            let p = Point::new(x, y);
            prop_assert_eq!(squared_distance(p, p), 0);
            prop_assert_eq!(toroidal_squared_distance(p, p, w), 0);
        }

        #[test]
        fn prop_shift_by_width_is_equivalent(
            px in 0i32..64, py in 0i32..64,
            dx in -32i32..=32, qy in 0i32..64,
            w in 64i32..256,
        ) {
            let p = Point::new(px, py);
            let q = Point::new(px + dx, qy);
            let shifted = Point::new(q.x + w, qy);
            prop_assert_eq!(toroidal_squared_distance(p, shifted, w), squared_distance(p, q));
            prop_assert_eq!(toroidal_squared_distance(p, p + Point::new(w, 0), w), 0);
        }

        #[test]
        fn prop_toroidal_never_exceeds_flat(
            px in 0i32..64, py in 0i32..64,
            qx in 0i32..64, qy in 0i32..64,
        ) {
            let p = Point::new(px, py);
            let q = Point::new(qx, qy);
            prop_assert!(toroidal_squared_distance(p, q, 64) <= squared_distance(p, q));
        }
    }
}
