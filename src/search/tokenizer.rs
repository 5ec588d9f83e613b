// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::utils::{normalize, SPACE_OR_PUNCTUATION};

/// Splits text into normalized terms. Used for both queries and record fields,
/// so a term and the tokens it should match go through the same steps.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Split on runs of whitespace or punctuation, then normalize each piece.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

impl Tokenizer for DefaultTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        SPACE_OR_PUNCTUATION
            .split(text)
            .map(normalize)
            .filter(|token| !token.is_empty())
            .collect()
    }
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Query terms with repeats removed, first occurrence kept.
pub fn unique_terms(tokenizer: &(impl Tokenizer + ?Sized), query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in tokenizer.tokenize(query) {
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}
