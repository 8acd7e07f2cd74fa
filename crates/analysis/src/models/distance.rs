use crate::sort::Direction;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Average gap between consecutive occurrences of a character.
///
/// Low values mean the character appears in bursts; high values mean it is
/// spread evenly across the book. A character seen only once has no gap to
/// measure and its distance is [`Undefined`](Self::Undefined).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Defined(f64),
    Undefined,
}
impl Distance {
    /// Computes `(last - first) / (count - 1)` from ascending positions.
    pub fn from_positions(positions: &[usize]) -> Self {
        match positions {
            [first, .., last] => Self::Defined((last - first) as f64 / (positions.len() - 1) as f64),
            _ => Self::Undefined,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(*value),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Orders two distances in the given direction. Undefined distances
    /// always sort after defined ones, whichever the direction.
    pub fn compare(&self, other: &Self, direction: Direction) -> Ordering {
        match (self, other) {
            (Self::Defined(a), Self::Defined(b)) => direction.apply(a.total_cmp(b)),
            (Self::Defined(_), Self::Undefined) => Ordering::Less,
            (Self::Undefined, Self::Defined(_)) => Ordering::Greater,
            (Self::Undefined, Self::Undefined) => Ordering::Equal,
        }
    }
}
impl Display for Distance {
    /// Two decimal places, or nothing at all when undefined.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Defined(value) => write!(f, "{value:.2}"),
            Self::Undefined => Ok(()),
        }
    }
}
