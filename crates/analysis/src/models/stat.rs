use super::Distance;

/// Occurrence statistics for one distinct character of one book.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStat {
    pub(crate) hanzi: char,
    pub(crate) positions: Vec<usize>,
    pub(crate) distance: Distance,
    pub(crate) examples: Vec<String>,
}
impl CharacterStat {
    /// Builds the statistics from strictly ascending occurrence positions.
    pub(crate) fn new(hanzi: char, positions: Vec<usize>, examples: Vec<String>) -> Self {
        debug_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        let distance = Distance::from_positions(&positions);
        Self {
            hanzi,
            positions,
            distance,
            examples,
        }
    }

    pub fn hanzi(&self) -> char {
        self.hanzi
    }

    /// Number of occurrences; always equal to the number of positions.
    pub fn frequency(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn first_position(&self) -> usize {
        // Stats are only ever built from at least one occurrence.
        self.positions.first().copied().unwrap_or(usize::MAX)
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Example sentences, in book order.
    pub fn examples(&self) -> &[String] {
        &self.examples
    }
}
