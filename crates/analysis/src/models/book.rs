use crate::tokenize::{Tokens, tokenize};

/// A single Hanzi at a given place in a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub hanzi: char,
    /// Zero-based index into the book's Hanzi sequence.
    pub position: usize,
    /// Index of the owning sentence in [`Book::sentences`].
    pub sentence: usize,
}

/// A loaded, tokenized book. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: String,
    text: String,
    sentences: Vec<String>,
    occurrences: Vec<Occurrence>,
}
impl Book {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let Tokens { sentences, occurrences } = tokenize(&text);
        Self {
            id: id.into(),
            text,
            sentences,
            occurrences,
        }
    }

    /// The book identifier, usually the file name without extension.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn sentence(&self, index: usize) -> Option<&str> {
        self.sentences.get(index).map(String::as_str)
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Total number of Hanzi in the book, repeats included.
    pub fn hanzi_count(&self) -> usize {
        self.occurrences.len()
    }
}
impl From<(String, String)> for Book {
    fn from((id, text): (String, String)) -> Self {
        Self::new(id, text)
    }
}
