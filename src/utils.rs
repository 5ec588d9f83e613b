// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the builders, the tokenizer and the ranker.
//!
//! Offsets exposed by this crate count Unicode scalar values, not bytes.
//! `regex` hands back byte offsets, so everything that reports a position
//! goes through [`char_offset`].

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Runs of whitespace, line breaks or punctuation. Tokens live between them.
pub static SPACE_OR_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\r\p{Z}\p{P}]+").expect("valid separator pattern"));

/// Normalize a token for matching: strip diacritics, lowercase, collapse whitespace.
///
/// - "café" → "cafe"
/// - "Délta" → "delta"
///
/// Without the `unicode-normalization` feature this only lowercases and
/// collapses whitespace.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks (Unicode category Mn) left behind by NFD.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Case-insensitive whole-word pattern for a literal token.
///
/// Returns `None` for empty tokens.
pub fn word_pattern(token: &str) -> Option<Regex> {
    if token.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(token))).ok()
}

/// Number of separator runs in `text`.
#[inline]
pub fn count_separators(text: &str) -> usize {
    SPACE_OR_PUNCTUATION.find_iter(text).count()
}

/// Convert a byte offset (on a char boundary) into a character offset.
#[inline]
pub fn char_offset(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset).map_or(0, |prefix| prefix.chars().count())
}

/// Slice `text` by a character range. Out-of-range ends are clamped.
pub fn char_slice(text: &str, range: Range<usize>) -> &str {
    let byte_at = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map_or(text.len(), |(byte, _)| byte)
    };
    let start = byte_at(range.start);
    let end = byte_at(range.end).max(start);
    &text[start..end]
}
