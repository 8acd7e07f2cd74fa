use super::{Book, CharacterStat};
use crate::sort::SortOrder;
use std::collections::HashMap;

/// Per-character statistics of one book. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct BookAnalysis {
    pub(crate) book: Book,
    pub(crate) stats: HashMap<char, CharacterStat>,
}
impl BookAnalysis {
    pub fn id(&self) -> &str {
        self.book.id()
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn get(&self, hanzi: char) -> Option<&CharacterStat> {
        self.stats.get(&hanzi)
    }

    pub fn contains(&self, hanzi: char) -> bool {
        self.stats.contains_key(&hanzi)
    }

    /// Distinct characters, in no particular order.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.stats.keys().copied()
    }

    /// Character statistics, in no particular order.
    pub fn stats(&self) -> impl Iterator<Item = &CharacterStat> {
        self.stats.values()
    }

    /// Every Hanzi occurrence in the book, repeats included.
    pub fn total_hanzi(&self) -> usize {
        self.book.hanzi_count()
    }

    pub fn unique_hanzi(&self) -> usize {
        self.stats.len()
    }

    pub fn sorted(&self, order: SortOrder) -> Vec<&CharacterStat> {
        order.sort(self.stats.values())
    }

    /// Characters from most to least frequent.
    pub fn ranked(&self) -> Vec<&CharacterStat> {
        self.sorted(SortOrder::ranking())
    }
}
impl AsRef<BookAnalysis> for BookAnalysis {
    fn as_ref(&self) -> &BookAnalysis {
        self
    }
}
