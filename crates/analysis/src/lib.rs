//! Hanzi analysis of Chinese texts.
//!
//! Everything in this crate is a pure, synchronous function of the text it is
//! given; books share no state and may be analysed on separate threads.
//!
//! - [`tokenize`] splits text into sentences and Hanzi occurrences.
//! - [`analyze`] counts every distinct character, records where it appears
//!   and how evenly it is spread ([`Distance`]), and attaches example
//!   sentences.
//! - [`SharedCharacterSet`] intersects the characters of several books.
//! - [`LearningList`] picks the characters to learn for a comprehension target.
//! - [`Statistics`] summarises one book or a whole selection.

mod analyze;
mod consts;
pub mod error;
mod learn;
pub mod models;
mod shared;
mod sort;
mod stats;
mod tokenize;
mod usage;

pub use crate::analyze::analyze;
pub use crate::learn::{LearningEntry, LearningList, LearningParameters, StopReason};
pub use crate::models::{Book, BookAnalysis, CharacterStat, Distance, Occurrence};
pub use crate::shared::{SharedCharacter, SharedCharacterSet};
pub use crate::sort::{Direction, SortOrder};
pub use crate::stats::{COMBINED_LABEL, PERCENTILES, Percentile, Statistics};
pub use crate::tokenize::{Tokens, is_hanzi, tokenize};
pub use crate::usage::{MAX_USAGE_EXAMPLES, usage_examples};

use crate::error::Result;
use tracing::instrument;

/// Easy, top-level entrypoint: tokenizes and analyses one book.
///
/// # Examples
///
/// ```
/// let analysis = hanzi_analysis::analyze_text("greeting", "你好你好吗？你很好。", 2).unwrap();
/// assert_eq!(analysis.total_hanzi(), 8);
/// assert_eq!(analysis.get('你').unwrap().frequency(), 3);
/// assert!(!analysis.get('吗').unwrap().distance().is_defined());
/// ```
#[instrument(skip(text), fields(text_size = text.len()))]
pub fn analyze_text(id: &str, text: &str, examples: usize) -> Result<BookAnalysis> {
    analyze(Book::new(id, text), examples)
}
