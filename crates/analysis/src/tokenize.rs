//! Splits raw text into sentences and Hanzi occurrences.

use crate::consts::{BYTE_ORDER_MARK, CLOSING_PUNCTUATION, HANZI_RANGES, INLINE_TERMINATORS, STRAIGHT_QUOTES};
use std::iter::Peekable;
use std::str::Chars;
use crate::models::Occurrence;
use tracing::instrument;

/// Returns `true` for characters in one of the Han ideograph blocks.
///
/// # Examples
///
/// ```
/// use hanzi_analysis::is_hanzi;
/// assert!(is_hanzi('好'));
/// assert!(!is_hanzi('。'));
/// assert!(!is_hanzi('a'));
/// ```
pub fn is_hanzi(c: char) -> bool {
    HANZI_RANGES.iter().any(|range| range.contains(&c))
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_inline_terminator(c: char) -> bool {
    INLINE_TERMINATORS.contains(&c)
}

fn is_closing(c: char) -> bool {
    CLOSING_PUNCTUATION.contains(&c)
}

/// `.` between two ASCII digits, as in `3.5`.
fn is_decimal_point(c: char, previous: Option<char>, next: Option<char>) -> bool {
    c == '.' && previous.is_some_and(|p| p.is_ascii_digit()) && next.is_some_and(|n| n.is_ascii_digit())
}

/// Whether the next character still belongs to a sentence that has just
/// reached its terminator.
fn continues_ending(chars: &Peekable<Chars<'_>>) -> bool {
    let mut lookahead = chars.clone();
    match lookahead.next() {
        Some(next) if is_inline_terminator(next) || is_closing(next) => true,
        Some(next) if STRAIGHT_QUOTES.contains(&next) => lookahead.peek().is_none_or(|after| after.is_whitespace()),
        _ => false,
    }
}

/// The output of tokenizing one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    /// Trimmed, non-empty sentences in text order.
    pub sentences: Vec<String>,
    /// Every Hanzi in text order; `position` counts Hanzi only.
    pub occurrences: Vec<Occurrence>,
}

/// Tokenizes `text` into sentences and Hanzi occurrences.
///
/// A sentence runs up to and including a terminator (`。！？…` and their
/// ASCII counterparts), together with any further terminators and closing
/// quotes or brackets directly after it. A `.` between digits is a decimal
/// point, not a terminator. Line breaks end a sentence too but
/// are not part of it. Runs that are empty after trimming are dropped.
///
/// Non-Hanzi characters stay in the sentence text but never appear in the
/// occurrence list, so positions measure gaps in Hanzi.
///
/// # Examples
///
/// ```
/// use hanzi_analysis::tokenize;
/// let tokens = tokenize("你好吗？我很好。");
/// assert_eq!(tokens.sentences, vec!["你好吗？", "我很好。"]);
/// assert_eq!(tokens.occurrences.len(), 6);
/// assert_eq!(tokens.occurrences[3].sentence, 1);
/// ```
#[instrument(level = "trace", skip(text), fields(text_size = text.len()))]
pub fn tokenize(text: &str) -> Tokens {
    let mut tokens = Tokens::default();
    // Occurrences seen since the last sentence boundary, waiting for the
    // index of the sentence that will own them.
    let mut pending: Vec<(char, usize)> = Vec::new();
    let mut current = String::new();
    let mut position = 0;
    let mut chars = text.trim_start_matches(BYTE_ORDER_MARK).chars().peekable();
    while let Some(c) = chars.next() {
        if is_line_break(c) {
            close_sentence(&mut tokens, &mut current, &mut pending);
            continue;
        }
        current.push(c);
        if is_hanzi(c) {
            pending.push((c, position));
            position += 1;
        }
        if is_inline_terminator(c) && !is_decimal_point(c, current.chars().nth_back(1), chars.peek().copied()) {
            while continues_ending(&chars)
                && let Some(next) = chars.next()
            {
                current.push(next);
            }
            close_sentence(&mut tokens, &mut current, &mut pending);
        }
    }
    close_sentence(&mut tokens, &mut current, &mut pending);
    tokens
}

fn close_sentence(tokens: &mut Tokens, current: &mut String, pending: &mut Vec<(char, usize)>) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        let index = tokens.sentences.len();
        tokens.sentences.push(sentence.to_string());
        tokens.occurrences.extend(pending.drain(..).map(|(hanzi, position)| Occurrence {
            hanzi,
            position,
            sentence: index,
        }));
    }
    // A run holding Hanzi is never blank, so nothing can be left pending here.
    debug_assert!(pending.is_empty());
    current.clear();
}
