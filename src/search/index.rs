// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-term lookups: the seam between the ranker and a full-text index.
//!
//! [`TermIndex`] is all the ranking pipeline needs from an index. The bundled
//! [`MemoryIndex`] implements it with a three-tier expansion of each term:
//! exact → prefix → fuzzy. Every vocabulary token a term reaches is reported
//! together with the fields it occurs in, so the ranker can tell a literal
//! hit from a typo.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use crate::config::SearchConfig;
use crate::fuzzy::levenshtein_within;
use crate::types::{Field, RawHit, SearchRecord, TokenMatches, SEARCH_ATTRIBUTES_ORDERED};

use super::tokenizer::Tokenizer;

/// A full-text index answering one term at a time.
pub trait TermIndex {
    /// Every record the term reaches, keyed by record id.
    fn search_term(&self, term: &str) -> BTreeMap<String, RawHit>;
}

/// Token → record index → fields the token occurs in.
type Postings = BTreeMap<String, BTreeMap<usize, BTreeSet<Field>>>;

/// In-memory inverted index over [`SearchRecord`]s.
#[derive(Debug, Clone)]
pub struct MemoryIndex {
    records: Vec<SearchRecord>,
    postings: Postings,
    config: SearchConfig,
}

impl MemoryIndex {
    /// Tokenize every searchable field of every record.
    pub fn new(
        records: Vec<SearchRecord>,
        tokenizer: &(impl Tokenizer + ?Sized),
        config: &SearchConfig,
    ) -> Self {
        let mut postings = Postings::new();
        for (index, record) in records.iter().enumerate() {
            for field in SEARCH_ATTRIBUTES_ORDERED {
                let Some(value) = record.field(field) else {
                    continue;
                };
                for token in tokenizer.tokenize(value) {
                    postings
                        .entry(token)
                        .or_default()
                        .entry(index)
                        .or_default()
                        .insert(field);
                }
            }
        }
        tracing::debug!(
            records = records.len(),
            vocabulary = postings.len(),
            "built memory index"
        );
        Self {
            records,
            postings,
            config: config.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Number of distinct tokens.
    pub fn vocabulary_len(&self) -> usize {
        self.postings.len()
    }

    /// Vocabulary tokens a term reaches, in vocabulary order.
    pub fn expand(&self, term: &str) -> BTreeSet<&str> {
        let mut tokens = BTreeSet::new();
        if term.is_empty() {
            return tokens;
        }

        // Tier 1: exact
        if let Some((token, _)) = self.postings.get_key_value(term) {
            tokens.insert(token.as_str());
        }

        // Tier 2: prefix
        if self.config.prefix {
            tokens.extend(
                self.postings
                    .range::<str, _>((Bound::Included(term), Bound::Unbounded))
                    .map(|(token, _)| token.as_str())
                    .take_while(|token| token.starts_with(term)),
            );
        }

        // Tier 3: fuzzy
        let max_edits = self.config.max_edits(term.chars().count());
        if max_edits > 0 {
            tokens.extend(
                self.postings
                    .keys()
                    .filter(|token| levenshtein_within(term, token, max_edits))
                    .map(String::as_str),
            );
        }

        tokens
    }
}

impl TermIndex for MemoryIndex {
    fn search_term(&self, term: &str) -> BTreeMap<String, RawHit> {
        let mut matches: BTreeMap<usize, TokenMatches> = BTreeMap::new();
        for token in self.expand(term) {
            let Some(records) = self.postings.get(token) else {
                continue;
            };
            for (&index, fields) in records {
                matches
                    .entry(index)
                    .or_default()
                    .insert(token.to_string(), fields.clone());
            }
        }

        let hits: BTreeMap<String, RawHit> = matches
            .into_iter()
            .map(|(index, matches)| {
                let record = self.records[index].clone();
                (record.id.clone(), RawHit { record, matches })
            })
            .collect();
        tracing::trace!(term, hits = hits.len(), "term lookup");
        hits
    }
}

impl<I: TermIndex + ?Sized> TermIndex for &I {
    fn search_term(&self, term: &str) -> BTreeMap<String, RawHit> {
        (**self).search_term(term)
    }
}

/// A fixed term table, for callers whose index already ran.
impl TermIndex for BTreeMap<String, BTreeMap<String, RawHit>> {
    fn search_term(&self, term: &str) -> BTreeMap<String, RawHit> {
        self.get(term).cloned().unwrap_or_default()
    }
}
