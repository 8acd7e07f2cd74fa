//! Selection of the characters worth learning before reading a book.
//!
//! Characters are walked from most to least frequent. Each one is admitted
//! while the running coverage is still below the comprehension target and
//! the character itself is at least as frequent as the threshold. Rare
//! characters are never selected, so the list may fall short of the target;
//! that outcome is reported through [`LearningList::stop_reason`] and
//! [`LearningList::coverage`], it is not an error.

use crate::models::{BookAnalysis, CharacterStat};
use crate::sort::SortOrder;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::instrument;

/// Knobs of the learning-list selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LearningParameters {
    /// Example sentences exported per character.
    pub usage_examples: usize,
    /// Percentage of the book's Hanzi occurrences to cover.
    pub comprehension_target: u8,
    /// Characters seen fewer times than this are never selected.
    pub frequency_threshold: usize,
}
impl Default for LearningParameters {
    fn default() -> Self {
        Self {
            usage_examples: 2,
            comprehension_target: 98,
            frequency_threshold: 20,
        }
    }
}

/// Why the selection walk stopped admitting characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// Cumulative coverage reached the comprehension target.
    TargetReached,
    /// The next candidate was rarer than the frequency threshold.
    BelowThreshold,
    /// Every character of the book was admitted.
    Exhausted,
}
impl Display for StopReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::TargetReached => "target reached",
            Self::BelowThreshold => "next character below frequency threshold",
            Self::Exhausted => "all characters selected",
        })
    }
}

/// A selected character.
#[derive(Debug, Clone, PartialEq)]
pub struct LearningEntry<'a> {
    pub stat: &'a CharacterStat,
    /// At most [`LearningParameters::usage_examples`] sentences.
    pub examples: &'a [String],
    /// Coverage (percent) of the book once this and every more frequent
    /// selected character are known.
    pub cumulative_coverage: f64,
}

/// The characters to learn for one book.
#[derive(Debug, Clone)]
pub struct LearningList<'a> {
    book: &'a str,
    parameters: LearningParameters,
    /// In selection order: most frequent first.
    entries: Vec<LearningEntry<'a>>,
    covered: usize,
    total: usize,
    stop: StopReason,
}
impl<'a> LearningList<'a> {
    #[instrument(skip_all, fields(
        book = analysis.id(),
        target = parameters.comprehension_target,
        threshold = parameters.frequency_threshold
    ))]
    pub fn select(analysis: &'a BookAnalysis, parameters: LearningParameters) -> Self {
        let total = analysis.total_hanzi();
        let target = usize::from(parameters.comprehension_target);
        let mut covered = 0;
        let mut entries = Vec::new();
        let mut stop = StopReason::Exhausted;
        for stat in analysis.ranked() {
            // Integer comparison: covered / total >= target / 100.
            if covered * 100 >= target * total {
                stop = StopReason::TargetReached;
                break;
            }
            if stat.frequency() < parameters.frequency_threshold {
                stop = StopReason::BelowThreshold;
                break;
            }
            covered += stat.frequency();
            let examples = &stat.examples()[..stat.examples().len().min(parameters.usage_examples)];
            entries.push(LearningEntry {
                stat,
                examples,
                cumulative_coverage: percentage(covered, total),
            });
        }
        if stop == StopReason::Exhausted && covered * 100 >= target * total && !entries.is_empty() {
            // The last character closed the gap exactly as the book ran out.
            stop = StopReason::TargetReached;
        }
        let list = Self {
            book: analysis.id(),
            parameters,
            entries,
            covered,
            total,
            stop,
        };
        tracing::debug!(
            selected = list.len(),
            coverage = list.coverage(),
            reason = %list.stop,
            "Selected characters to learn"
        );
        list
    }

    pub fn book(&self) -> &'a str {
        self.book
    }

    pub fn parameters(&self) -> LearningParameters {
        self.parameters
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, hanzi: char) -> bool {
        self.entries.iter().any(|entry| entry.stat.hanzi() == hanzi)
    }

    /// Entries in selection order, most frequent first.
    pub fn entries(&self) -> &[LearningEntry<'a>] {
        &self.entries
    }

    /// Entries in display order, independent of the selection walk.
    pub fn sorted(&self, order: SortOrder) -> Vec<&LearningEntry<'a>> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| order.compare(a.stat, b.stat));
        sorted
    }

    /// Occurrences covered by the selected characters.
    pub fn covered_hanzi(&self) -> usize {
        self.covered
    }

    /// Achieved coverage, in percent of the book's Hanzi occurrences.
    pub fn coverage(&self) -> f64 {
        percentage(self.covered, self.total)
    }

    pub fn reached_target(&self) -> bool {
        self.covered * 100 >= usize::from(self.parameters.comprehension_target) * self.total
    }

    pub fn stop_reason(&self) -> StopReason {
        self.stop
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}
