//! Packed single-bit grid used as a visited marker.

const WORD_BITS: usize = u64::BITS as usize;

/// A `width x height` grid of booleans, one bit per cell.
///
/// Starts all-false. [`BitGrid::clear`] resets it without reallocating, so one
/// instance can be reused across many traversals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: usize,
    height: usize,
    words: Vec<u64>,
}

impl BitGrid {
    pub fn new(width: usize, height: usize) -> Self {
        let words = (width * height).div_ceil(WORD_BITS);
        Self {
            width,
            height,
            words: vec![0; words],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> (usize, u64) {
        assert!(
            row < self.height && col < self.width,
            "bit ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        let i = row * self.width + col;
        (i / WORD_BITS, 1u64 << (i % WORD_BITS))
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        let (word, mask) = self.locate(row, col);
        self.words[word] & mask != 0
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let (word, mask) = self.locate(row, col);
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    /// Sets the bit and returns its previous value.
    #[inline]
    pub fn test_and_set(&mut self, row: usize, col: usize) -> bool {
        let (word, mask) = self.locate(row, col);
        let was_set = self.words[word] & mask != 0;
        self.words[word] |= mask;
        was_set
    }

    /// Resets every bit to false.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clear() {
        let bits = BitGrid::new(9, 7);
        assert_eq!(bits.count_ones(), 0);
        assert!(!bits.get(6, 8));
    }

    #[test]
    fn test_set_get_and_clear() {
        let mut bits = BitGrid::new(10, 10);
        bits.set(0, 0, true);
        bits.set(6, 4, true);
        bits.set(9, 9, true);
        bits.set(6, 4, false);

        assert!(bits.get(0, 0));
        assert!(!bits.get(6, 4));
        assert!(bits.get(9, 9));
        assert_eq!(bits.count_ones(), 2);

        bits.clear();
        assert_eq!(bits.count_ones(), 0);
        assert_eq!(bits.width(), 10);
    }

    #[test]
    fn test_and_set_reports_previous_state() {
        let mut bits = BitGrid::new(3, 3);
        assert!(!bits.test_and_set(1, 2));
        assert!(bits.test_and_set(1, 2));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_panics() {
        let bits = BitGrid::new(3, 3);
        bits.get(3, 0);
    }
}
