//! Example sentence selection.

use crate::models::Book;

/// Upper bound of example sentences per character.
pub const MAX_USAGE_EXAMPLES: usize = 10;

/// Picks up to `count` distinct sentences containing the character found at
/// `positions` (ascending), earliest first.
///
/// Several occurrences inside one sentence yield that sentence once; the
/// scan carries on to later occurrences until enough distinct sentences are
/// collected or the occurrences run out.
pub fn usage_examples(book: &Book, positions: &[usize], count: usize) -> Vec<String> {
    let mut sentences: Vec<usize> = Vec::with_capacity(count.min(positions.len()));
    for &position in positions {
        if sentences.len() >= count {
            break;
        }
        let Some(occurrence) = book.occurrences().get(position) else {
            continue;
        };
        // Positions ascend, so owning sentences never go backwards; comparing
        // with the last pick is enough to collapse repeats.
        if sentences.last() != Some(&occurrence.sentence) {
            sentences.push(occurrence.sentence);
        }
    }
    sentences.into_iter().filter_map(|index| book.sentence(index).map(str::to_string)).collect()
}
