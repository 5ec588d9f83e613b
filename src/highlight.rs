// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result snippets with matched words marked.

use regex::{Captures, Regex};

use crate::types::SearchResult;
use crate::utils::SPACE_OR_PUNCTUATION;

/// Default number of tokens kept in a snippet.
pub const SNIPPET_TOKENS: usize = 16;

/// One case-insensitive whole-word pattern matching any of `tokens`.
///
/// Longer tokens are tried first so a prefix never shadows the full word.
pub fn any_word_pattern<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Option<Regex> {
    let mut tokens: Vec<&str> = tokens.into_iter().filter(|t| !t.is_empty()).collect();
    if tokens.is_empty() {
        return None;
    }
    tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    tokens.dedup();
    let alternation = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).ok()
}

/// Snippet of `text` around the first match of any token `result` matched.
///
/// Starts at the first match (or the start of `text`), keeps at most
/// `max_tokens` words, and wraps each match in `open`/`close`. Cut ends are
/// marked with `"... "` and `" ..."`.
pub fn highlight(
    text: &str,
    result: &SearchResult,
    max_tokens: usize,
    open: &str,
    close: &str,
) -> String {
    let pattern = any_word_pattern(
        result
            .queries
            .iter()
            .flat_map(|query| query.matches.keys().map(String::as_str)),
    );

    let start = pattern
        .as_ref()
        .and_then(|p| p.find(text))
        .map_or(0, |m| m.start());
    let rest = &text[start..];
    let cut = SPACE_OR_PUNCTUATION
        .find_iter(rest)
        .nth(max_tokens.max(1) - 1)
        .map_or(rest.len(), |m| m.start());
    let window = &rest[..cut];

    let mut snippet = match &pattern {
        Some(pattern) => pattern
            .replace_all(window, |caps: &Captures| {
                format!("{}{}{}", open, &caps[0], close)
            })
            .into_owned(),
        None => window.to_string(),
    };
    if start != 0 {
        snippet = format!("... {}", snippet);
    }
    if start + cut != text.len() {
        snippet = format!("{} ...", snippet);
    }
    snippet
}
