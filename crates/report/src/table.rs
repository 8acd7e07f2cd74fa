//! In-memory tables handed to the CSV writer, one per output file.

use hanzi_analysis::{
    BookAnalysis, CharacterStat, Direction, LearningList, PERCENTILES, SharedCharacterSet, SortOrder, Statistics,
};

pub const SHARED_HANZI_FILE: &str = "shared-hanzi.csv";
pub const COMBINED_STATS_FILE: &str = "combined-stats.csv";

/// Rows of named columns, plus the file name they are exported under.
///
/// Every row has exactly as many cells as there are headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}
impl Table {
    pub fn new(name: impl Into<String>, headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding missing cells with empty strings and dropping
    /// surplus ones.
    pub fn push(&mut self, row: impl IntoIterator<Item = impl Into<String>>) {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Output file name, e.g. `西游记_hanzi.csv`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the named column, top to bottom.
    pub fn column(&self, header: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == header)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}

/// Tables of the exported artifacts.
impl Table {
    /// Every distinct character of a book.
    pub fn unique_hanzi(analysis: &BookAnalysis, order: SortOrder, examples: usize) -> Self {
        let mut table = Self::new(format!("{}_hanzi.csv", analysis.id()), character_headers(examples));
        for stat in analysis.sorted(order) {
            table.push(character_row(stat, stat.examples(), examples));
        }
        table
    }

    /// The characters to learn for a book.
    pub fn hanzi_to_learn(list: &LearningList<'_>, order: SortOrder) -> Self {
        let examples = list.parameters().usage_examples;
        let mut table = Self::new(format!("{}_learn.csv", list.book()), character_headers(examples));
        for entry in list.sorted(order) {
            table.push(character_row(entry.stat, entry.examples, examples));
        }
        table
    }

    /// Characters common to every selected book. The frequency column is the
    /// sum over the books, hence its `freq_total` header.
    pub fn shared_hanzi(shared: &SharedCharacterSet, direction: Direction) -> Self {
        let mut table = Self::new(SHARED_HANZI_FILE, ["hanzi", "freq_total"]);
        for character in shared.sorted(direction) {
            table.push([character.hanzi.to_string(), character.total().to_string()]);
        }
        table
    }

    /// One row per entry of `statistics`.
    pub fn statistics(name: impl Into<String>, statistics: &[Statistics], percentiles: bool) -> Self {
        let mut headers: Vec<String> =
            ["book", "total_hanzi", "unique_hanzi", "type_token_ratio"].map(String::from).to_vec();
        if percentiles {
            for percent in PERCENTILES {
                headers.push(format!("top_{percent}%_coverage"));
                headers.push(format!("top_{percent}%_count"));
            }
        }
        let mut table = Self::new(name, headers);
        for stats in statistics {
            let mut row = vec![
                stats.label.clone(),
                stats.total_hanzi.to_string(),
                stats.unique_hanzi.to_string(),
                format!("{:.4}", stats.type_token_ratio()),
            ];
            if percentiles {
                for percentile in &stats.percentiles {
                    row.push(format!("{:.2}", percentile.coverage));
                    row.push(percentile.characters.to_string());
                }
            }
            table.push(row);
        }
        table
    }
}

fn character_headers(examples: usize) -> Vec<String> {
    let mut headers: Vec<String> = ["hanzi", "freq", "dist"].map(String::from).to_vec();
    headers.extend((1..=examples).map(|n| format!("ex{n}")));
    headers
}

fn character_row(stat: &CharacterStat, sentences: &[String], examples: usize) -> Vec<String> {
    let mut row = vec![stat.hanzi().to_string(), stat.frequency().to_string(), stat.distance().to_string()];
    row.extend(sentences.iter().take(examples).cloned());
    row
}
