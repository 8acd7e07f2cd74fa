//! Code point tables driving tokenization.
//!
//! Membership is decided by explicit ranges rather than locale-aware string
//! functions, so the same text always tokenizes the same way on any platform.

use std::ops::RangeInclusive;

/// Han ideograph blocks, sorted by start code point.
pub(crate) const HANZI_RANGES: [RangeInclusive<char>; 6] = [
    // CJK Unified Ideographs Extension A
    '\u{3400}'..='\u{4DBF}',
    // CJK Unified Ideographs
    '\u{4E00}'..='\u{9FFF}',
    // CJK Compatibility Ideographs
    '\u{F900}'..='\u{FAFF}',
    // CJK Unified Ideographs Extensions B, C, D, E and F
    '\u{20000}'..='\u{2EBEF}',
    // CJK Compatibility Ideographs Supplement
    '\u{2F800}'..='\u{2FA1F}',
    // CJK Unified Ideographs Extensions G and H
    '\u{30000}'..='\u{323AF}',
];

/// Punctuation ending a sentence on the same line.
pub(crate) const INLINE_TERMINATORS: [char; 9] = [
    '。', '！', '？', '｡', '．', '…', '.', '!', '?',
];

/// Closing quotes and brackets that belong to the sentence they follow.
pub(crate) const CLOSING_PUNCTUATION: [char; 17] = [
    '」', '﹂', '”', '』', '’', '》', '）', '］', '｝', '〕', '〗', '〙', '〛', '〉', '】', ')', ']',
];

/// ASCII quotes open and close alike; after a terminator they only close the
/// sentence when nothing but whitespace follows them.
pub(crate) const STRAIGHT_QUOTES: [char; 2] = ['"', '\''];

/// Byte-order mark some editors prepend to UTF-8 text files.
pub(crate) const BYTE_ORDER_MARK: char = '\u{FEFF}';
