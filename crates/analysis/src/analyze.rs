//! Frequency and distance analysis of a tokenized book.

use crate::error::{ErrorKind, Result};
use crate::models::{Book, BookAnalysis, CharacterStat};
use crate::usage::usage_examples;
use std::collections::HashMap;
use tracing::instrument;

/// Builds the [`BookAnalysis`] of `book`, attaching up to `examples` usage
/// sentences to every character.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyBook`] if the book contains no Hanzi.
#[instrument(skip(book), fields(book = book.id(), total_hanzi = book.hanzi_count()))]
pub fn analyze(book: Book, examples: usize) -> Result<BookAnalysis> {
    if book.hanzi_count() == 0 {
        exn::bail!(ErrorKind::EmptyBook(book.id().to_string()));
    }
    // Occurrences are in text order, so every position list comes out ascending.
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for occurrence in book.occurrences() {
        positions.entry(occurrence.hanzi).or_default().push(occurrence.position);
    }
    let stats = positions
        .into_iter()
        .map(|(hanzi, positions)| {
            let sentences = usage_examples(&book, &positions, examples);
            (hanzi, CharacterStat::new(hanzi, positions, sentences))
        })
        .collect::<HashMap<_, _>>();
    tracing::debug!(unique_hanzi = stats.len(), "Analysed book");
    Ok(BookAnalysis { book, stats })
}

impl TryFrom<Book> for BookAnalysis {
    type Error = crate::error::Error;
    /// Analyses without collecting usage examples.
    fn try_from(book: Book) -> Result<Self> {
        analyze(book, 0)
    }
}
