// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query pipeline: tokenize → per-term lookup → AND-merge → rank.
//!
//! Each stage is a separate module so it can be swapped or tested alone.
//! [`search`] wires them together for any [`TermIndex`].

pub mod combine;
pub mod index;
pub mod tokenizer;

pub use combine::combine_results;
pub use index::{MemoryIndex, TermIndex};
pub use tokenizer::{unique_terms, DefaultTokenizer, Tokenizer};

use crate::scoring::rank_results;
use crate::types::RankedSearchResult;

/// Run `query` against `index` and return every record that matched all of
/// its terms, most relevant first.
///
/// Repeated terms count once. Lookups stop at the first term with no hits,
/// since the AND-merge could not produce anything after it.
pub fn search<I, T>(
    index: &I,
    tokenizer: &T,
    query: &str,
    proximity_bound: usize,
) -> Vec<RankedSearchResult>
where
    I: TermIndex + ?Sized,
    T: Tokenizer + ?Sized,
{
    let terms = unique_terms(tokenizer, query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut term_hits = Vec::with_capacity(terms.len());
    for term in terms {
        let hits = index.search_term(&term);
        if hits.is_empty() {
            tracing::debug!(term = %term, "no hits, stopping early");
            return Vec::new();
        }
        term_hits.push((term, hits));
    }

    let results = combine_results(term_hits);
    tracing::debug!(query, results = results.len(), "combined");
    rank_results(results, proximity_bound)
}
