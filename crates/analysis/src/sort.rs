//! Orderings for exported character tables.

use crate::models::CharacterStat;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Sort direction of a single key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Low to high.
    Ascending,
    /// High to low.
    #[default]
    Descending,
}
impl Direction {
    /// Applies the direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}
impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Ordering of a book's characters: by frequency, then (optionally) by
/// average distance, then by first occurrence so the result is total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortOrder {
    pub frequency: Direction,
    /// Secondary key; only individual exports sort by distance.
    pub distance: Option<Direction>,
}
impl SortOrder {
    pub fn new(frequency: Direction, distance: impl Into<Option<Direction>>) -> Self {
        Self {
            frequency,
            distance: distance.into(),
        }
    }

    /// Most frequent first, earliest first occurrence breaking ties.
    pub fn ranking() -> Self {
        Self::new(Direction::Descending, None)
    }

    pub fn compare(&self, a: &CharacterStat, b: &CharacterStat) -> Ordering {
        self.frequency
            .apply(a.frequency().cmp(&b.frequency()))
            .then_with(|| match self.distance {
                Some(direction) => a.distance().compare(&b.distance(), direction),
                None => Ordering::Equal,
            })
            .then_with(|| a.first_position().cmp(&b.first_position()))
    }

    /// Sorts any collection of stats into a new vector.
    pub fn sort<'a>(&self, stats: impl IntoIterator<Item = &'a CharacterStat>) -> Vec<&'a CharacterStat> {
        let mut sorted: Vec<_> = stats.into_iter().collect();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}
