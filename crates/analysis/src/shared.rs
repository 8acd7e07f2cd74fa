//! Characters shared by every book of a selection.

use crate::models::BookAnalysis;
use crate::sort::Direction;
use std::collections::BTreeSet;
use tracing::instrument;

/// A character present in every selected book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedCharacter {
    pub hanzi: char,
    /// Frequency in each book, in selection order.
    pub frequencies: Vec<usize>,
}
impl SharedCharacter {
    /// Sum of the per-book frequencies; the value shared tables are sorted
    /// and exported by.
    pub fn total(&self) -> usize {
        self.frequencies.iter().sum()
    }
}

/// The intersection of the character sets of two or more books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedCharacterSet {
    books: Vec<String>,
    /// Ordered by code point.
    characters: Vec<SharedCharacter>,
}
impl SharedCharacterSet {
    /// Intersects the character sets of `analyses`.
    ///
    /// Returns `None` when fewer than two books are given: "shared" has no
    /// meaning for a single book. The result does not depend on the order of
    /// the books, apart from the order of [`SharedCharacter::frequencies`].
    #[instrument(skip_all)]
    pub fn intersect<'a>(analyses: impl IntoIterator<Item = &'a BookAnalysis>) -> Option<Self> {
        let analyses: Vec<&BookAnalysis> = analyses.into_iter().collect();
        let [first, rest @ ..] = analyses.as_slice() else {
            return None;
        };
        if rest.is_empty() {
            return None;
        }
        let common: BTreeSet<char> =
            first.characters().filter(|hanzi| rest.iter().all(|analysis| analysis.contains(*hanzi))).collect();
        let characters = common
            .into_iter()
            .map(|hanzi| SharedCharacter {
                hanzi,
                frequencies: analyses
                    .iter()
                    .map(|analysis| analysis.get(hanzi).map(|stat| stat.frequency()).unwrap_or_default())
                    .collect(),
            })
            .collect::<Vec<_>>();
        tracing::debug!(books = analyses.len(), shared = characters.len(), "Intersected character sets");
        Some(Self {
            books: analyses.iter().map(|analysis| analysis.id().to_string()).collect(),
            characters,
        })
    }

    pub fn books(&self) -> &[String] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn contains(&self, hanzi: char) -> bool {
        self.characters.binary_search_by_key(&hanzi, |c| c.hanzi).is_ok()
    }

    /// Characters ordered by code point.
    pub fn characters(&self) -> &[SharedCharacter] {
        &self.characters
    }

    /// Characters ordered by total frequency, code point breaking ties.
    pub fn sorted(&self, direction: Direction) -> Vec<&SharedCharacter> {
        let mut sorted: Vec<_> = self.characters.iter().collect();
        sorted.sort_by(|a, b| direction.apply(a.total().cmp(&b.total())).then_with(|| a.hanzi.cmp(&b.hanzi)));
        sorted
    }
}
