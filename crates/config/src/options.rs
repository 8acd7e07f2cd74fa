//! The validated, immutable export configuration.

use hanzi_analysis::{Direction, LearningParameters, SortOrder};

/// Everything an export run needs to know, fixed at run start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    pub hanzi: HanziMode,
    pub statistics: StatisticsMode,
}
impl ExportConfig {
    /// Example sentences to collect per character while analysing books.
    pub fn usage_examples(&self) -> usize {
        match &self.hanzi {
            HanziMode::Individual(individual) => individual.learning.usage_examples,
            HanziMode::None | HanziMode::Shared { .. } => 0,
        }
    }

    /// Smallest selection the configured exports can run on.
    pub fn minimum_books(&self) -> usize {
        match self.hanzi {
            HanziMode::Shared { .. } => 2,
            _ => 1,
        }
    }
}
impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            hanzi: HanziMode::Individual(IndividualExport::default()),
            statistics: StatisticsMode::None,
        }
    }
}

/// Which character tables to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HanziMode {
    None,
    /// One set of tables per book.
    Individual(IndividualExport),
    /// A single table of the characters common to every selected book.
    Shared { frequency: Direction },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndividualExport {
    pub files: ExportFiles,
    pub order: SortOrder,
    pub learning: LearningParameters,
}
impl Default for IndividualExport {
    /// Most frequent first, then most evenly spread first.
    fn default() -> Self {
        Self {
            files: ExportFiles::default(),
            order: SortOrder::new(Direction::Descending, Direction::Descending),
            learning: LearningParameters::default(),
        }
    }
}

/// Per-book files of an individual export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFiles {
    /// Every distinct character.
    UniqueOnly,
    /// Only the characters to learn.
    #[default]
    LearningOnly,
    Both,
}
impl ExportFiles {
    pub fn unique(&self) -> bool {
        matches!(self, Self::UniqueOnly | Self::Both)
    }

    pub fn learning(&self) -> bool {
        matches!(self, Self::LearningOnly | Self::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsMode {
    None,
    /// One statistics file per book.
    Individual(StatisticsOptions),
    /// One row aggregating every selected book.
    Combined(StatisticsOptions),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatisticsOptions {
    /// Adds the top-percentile coverage columns.
    pub percentiles: bool,
}
