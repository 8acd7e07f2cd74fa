//! Corpus statistics, per book or combined across books.

use crate::models::{BookAnalysis, CharacterStat};
use std::collections::HashMap;
use tracing::instrument;

/// Shares of the most frequent characters reported in statistics.
pub const PERCENTILES: [u8; 9] = [1, 2, 5, 10, 15, 20, 30, 40, 50];

/// Identifier of combined statistics rows.
pub const COMBINED_LABEL: &str = "combined";

/// How much of the text the top `percent`% of distinct characters cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentile {
    pub percent: u8,
    /// Number of distinct characters in the top `percent`%, rounded half up.
    pub characters: usize,
    /// Share of all Hanzi occurrences they account for, in percent.
    pub coverage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Book identifier, or [`COMBINED_LABEL`].
    pub label: String,
    pub books: usize,
    pub total_hanzi: usize,
    pub unique_hanzi: usize,
    pub percentiles: Vec<Percentile>,
}
impl Statistics {
    #[instrument(level = "debug", skip_all, fields(book = analysis.id()))]
    pub fn individual(analysis: &BookAnalysis) -> Self {
        let frequencies: Vec<usize> = analysis.ranked().into_iter().map(CharacterStat::frequency).collect();
        Self {
            label: analysis.id().to_string(),
            books: 1,
            total_hanzi: analysis.total_hanzi(),
            unique_hanzi: analysis.unique_hanzi(),
            percentiles: percentiles(&frequencies, analysis.total_hanzi()),
        }
    }

    /// Aggregates several books into one row. Totals are summed; the unique
    /// count is the size of the union of character sets, so characters
    /// shared between books are only counted once.
    ///
    /// Returns `None` if no analyses are given.
    #[instrument(level = "debug", skip_all)]
    pub fn combined<'a>(analyses: impl IntoIterator<Item = &'a BookAnalysis>) -> Option<Self> {
        let mut books = 0;
        let mut total_hanzi = 0;
        let mut merged: HashMap<char, usize> = HashMap::new();
        for analysis in analyses {
            books += 1;
            total_hanzi += analysis.total_hanzi();
            for stat in analysis.stats() {
                *merged.entry(stat.hanzi()).or_default() += stat.frequency();
            }
        }
        if books == 0 {
            return None;
        }
        let mut frequencies: Vec<usize> = merged.values().copied().collect();
        frequencies.sort_unstable_by(|a, b| b.cmp(a));
        Some(Self {
            label: COMBINED_LABEL.to_string(),
            books,
            total_hanzi,
            unique_hanzi: merged.len(),
            percentiles: percentiles(&frequencies, total_hanzi),
        })
    }

    /// Distinct characters per occurrence.
    pub fn type_token_ratio(&self) -> f64 {
        if self.total_hanzi == 0 {
            return 0.0;
        }
        self.unique_hanzi as f64 / self.total_hanzi as f64
    }
}

/// `frequencies` must be sorted from most to least frequent.
fn percentiles(frequencies: &[usize], total: usize) -> Vec<Percentile> {
    PERCENTILES
        .iter()
        .map(|&percent| {
            let characters = (usize::from(percent) * frequencies.len() + 50) / 100;
            let covered: usize = frequencies.iter().take(characters).sum();
            let coverage = if total == 0 { 0.0 } else { covered as f64 * 100.0 / total as f64 };
            Percentile {
                percent,
                characters,
                coverage,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use crate::models::Book;
    use rstest::rstest;

    fn analysis(id: &str, text: &str) -> BookAnalysis {
        analyze(Book::new(id, text), 0).unwrap()
    }

    #[test]
    fn test_individual() {
        let stats = Statistics::individual(&analysis("greeting", "你好你好吗？你很好。"));
        assert_eq!(stats.label, "greeting");
        assert_eq!(stats.total_hanzi, 8);
        assert_eq!(stats.unique_hanzi, 4);
        assert_eq!(stats.type_token_ratio(), 0.5);
        assert_eq!(stats.percentiles.len(), PERCENTILES.len());
    }

    #[test]
    fn test_combined_counts_union() {
        let a = analysis("a", "甲乙丙甲。");
        let b = analysis("b", "乙丙丁。");
        let combined = Statistics::combined([&a, &b]).unwrap();
        assert_eq!(combined.label, COMBINED_LABEL);
        assert_eq!(combined.books, 2);
        assert_eq!(combined.total_hanzi, 7);
        assert_eq!(combined.unique_hanzi, 4);
        assert!(combined.unique_hanzi < a.unique_hanzi() + b.unique_hanzi());
    }

    #[test]
    fn test_combined_disjoint_equals_sum() {
        let a = analysis("a", "甲乙。");
        let b = analysis("b", "丙丁戊。");
        let combined = Statistics::combined([&a, &b]).unwrap();
        assert_eq!(combined.unique_hanzi, a.unique_hanzi() + b.unique_hanzi());
    }

    #[test]
    fn test_combined_requires_books() {
        assert!(Statistics::combined(Vec::<&BookAnalysis>::new()).is_none());
    }

    #[rstest]
    // 200 distinct characters: 1% is 2 characters, 50% is 100.
    #[case(1, 2)]
    #[case(5, 10)]
    #[case(50, 100)]
    fn test_percentile_sizes(#[case] percent: u8, #[case] expected: usize) {
        let text: String = (0..200u32).filter_map(|offset| char::from_u32(0x4E00 + offset)).collect();
        let stats = Statistics::individual(&analysis("wide", &text));
        let percentile = stats.percentiles.iter().find(|p| p.percent == percent).unwrap();
        assert_eq!(percentile.characters, expected);
        assert_eq!(percentile.coverage, expected as f64 * 100.0 / 200.0);
    }

    #[test]
    fn test_percentiles_favour_frequent_characters() {
        // 一 appears 91 times, the other 99 characters once each.
        let mut text = "一".repeat(91);
        text.extend((1..100u32).filter_map(|offset| char::from_u32(0x4E00 + offset)));
        let stats = Statistics::individual(&analysis("skewed", &text));
        let top = stats.percentiles.first().unwrap();
        assert_eq!(top.percent, 1);
        assert_eq!(top.characters, 1);
        assert_eq!(top.coverage, 91.0 * 100.0 / 190.0);
    }
}
