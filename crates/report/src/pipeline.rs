//! Per-book Read → Tokenize → Analyze pipeline.
//!
//! Books share no state, so each one runs on its own rayon task; a failing
//! book never affects the others. Results come back in selection order once
//! every task has finished, which is the barrier cross-book exports wait on.

use crate::error::{ErrorKind, Result};
use crate::source::BookSource;
use exn::ResultExt;
use hanzi_analysis::{BookAnalysis, analyze_text};
use rayon::prelude::*;
use tracing::instrument;

/// The outcome of processing one selected book.
#[derive(Debug)]
pub struct BookOutcome {
    pub id: String,
    pub result: Result<BookAnalysis>,
}

/// Reads and analyses every source in parallel, collecting `examples` usage
/// sentences per character.
#[instrument(skip(sources), fields(books = sources.len()))]
pub fn analyze_books<S: BookSource>(sources: &[S], examples: usize) -> Vec<BookOutcome> {
    sources
        .par_iter()
        .map(|source| BookOutcome {
            id: source.id().to_string(),
            result: analyze_source(source, examples),
        })
        .collect()
}

fn analyze_source<S: BookSource>(source: &S, examples: usize) -> Result<BookAnalysis> {
    let text = source.read()?;
    analyze_text(source.id(), &text, examples).or_raise(|| ErrorKind::Analysis(source.id().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TextBook;

    #[test]
    fn test_failures_are_isolated() {
        let sources = vec![
            TextBook::new("一", "你好。"),
            TextBook::new("二", "Nothing to see here."),
            TextBook::new("三", "再见。"),
        ];
        let outcomes = analyze_books(&sources, 1);
        let ids: Vec<_> = outcomes.iter().map(|outcome| outcome.id.as_str()).collect();
        assert_eq!(ids, vec!["一", "二", "三"]);
        assert!(outcomes[0].result.is_ok());
        let err = outcomes[1].result.as_ref().unwrap_err();
        assert_eq!(**err, ErrorKind::Analysis("二".to_string()));
        assert_eq!(outcomes[2].result.as_ref().unwrap().total_hanzi(), 2);
    }
}
