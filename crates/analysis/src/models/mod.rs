mod analysis;
mod book;
mod distance;
mod stat;

pub use self::analysis::BookAnalysis;
pub use self::book::{Book, Occurrence};
pub use self::distance::Distance;
pub use self::stat::CharacterStat;
