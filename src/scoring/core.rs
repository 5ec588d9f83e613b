// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The individual ranking criteria.
//!
//! Each function looks at one [`SearchResult`] and measures one thing: how
//! many typos it took to reach it, which field matched, how close the terms
//! sit to each other, how many terms matched literally, and how heavy the
//! record's own type is.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::types::{Field, HeadingLevel, Query, RecordKind, SearchResult};
use crate::utils::{char_offset, count_separators, word_pattern};

/// Weights of heading records, `lvl1` first.
pub const LEVEL_WEIGHTS: [u8; 6] = [90, 80, 70, 60, 50, 40];

/// Weight of content records.
pub const CONTENT_WEIGHT: u8 = 0;

/// Weight of a record's own type. Heavier ranks first.
#[inline]
pub fn level_weight(kind: &RecordKind) -> u8 {
    kind.level().map_or(CONTENT_WEIGHT, heading_weight)
}

/// Weight of a heading level.
#[inline]
pub fn heading_weight(level: HeadingLevel) -> u8 {
    LEVEL_WEIGHTS[usize::from(level.depth() - 1)]
}

/// Compiled whole-word patterns, one per token.
///
/// Ranking a result set compiles the same few tokens over and over; this
/// keeps one `Regex` per token for the whole pass.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: HashMap<String, Option<Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, token: &str) -> Option<&Regex> {
        self.patterns
            .entry(token.to_string())
            .or_insert_with(|| word_pattern(token))
            .as_ref()
    }

    /// Byte offsets where `token` starts as a whole word in `text`.
    pub fn starts(&mut self, token: &str, text: &str) -> Vec<usize> {
        self.get(token)
            .map(|pattern| pattern.find_iter(text).map(|m| m.start()).collect())
            .unwrap_or_default()
    }

    pub fn is_match(&mut self, token: &str, text: &str) -> bool {
        self.get(token).is_some_and(|pattern| pattern.is_match(text))
    }
}

/// Matched tokens that differ from their term, summed over terms.
pub fn count_typos(result: &SearchResult) -> usize {
    result
        .queries
        .iter()
        .map(|query| {
            query
                .matches
                .keys()
                .filter(|token| **token != query.term)
                .count()
        })
        .sum()
}

/// Best-priority matched field and, when that field is positional, the
/// character offset of the earliest whole-word match in it.
///
/// A result whose hits name no field at all falls back to `content`.
pub fn matched_attribute_position(
    result: &SearchResult,
    patterns: &mut PatternCache,
) -> (Field, Option<usize>) {
    let mut field_tokens: BTreeMap<Field, BTreeSet<&str>> = BTreeMap::new();
    for query in &result.queries {
        for (token, fields) in &query.matches {
            for &field in fields {
                field_tokens.entry(field).or_default().insert(token.as_str());
            }
        }
    }

    let Some((&attribute, tokens)) = field_tokens.iter().next() else {
        return (Field::Content, None);
    };
    if !attribute.is_positional() {
        return (attribute, None);
    }

    let Some(text) = result.record.field(attribute) else {
        return (attribute, None);
    };
    let position = tokens
        .iter()
        .filter_map(|token| patterns.starts(token, text).into_iter().next())
        .min()
        .map(|byte| char_offset(text, byte));
    (attribute, position)
}

/// Separator distance between two adjacent terms: the closest pair of
/// occurrences of any of their tokens in any field both terms matched.
///
/// Returns `bound` when no pair is found. One separator is the best possible
/// gap and ends the search.
fn pair_proximity(
    result: &SearchResult,
    left: &Query,
    right: &Query,
    bound: usize,
    patterns: &mut PatternCache,
) -> usize {
    let mut best = bound;
    for (left_token, left_fields) in &left.matches {
        for &field in left_fields {
            let Some(text) = result.record.field(field) else {
                continue;
            };
            for (right_token, right_fields) in &right.matches {
                // Matches in different fields can never beat the bound
                if !right_fields.contains(&field) {
                    continue;
                }
                let left_starts = patterns.starts(left_token, text);
                let right_starts = patterns.starts(right_token, text);
                for &l in &left_starts {
                    for &r in &right_starts {
                        if l == r {
                            continue;
                        }
                        let (start, stop) = if l < r { (l, r) } else { (r, l) };
                        let gap = count_separators(&text[start..stop]);
                        if gap <= 1 {
                            return 1;
                        }
                        best = best.min(gap);
                    }
                }
            }
        }
    }
    best
}

/// Sum of adjacent-term gaps, capped at `bound`. A single term scores 0.
pub fn proximity(result: &SearchResult, bound: usize, patterns: &mut PatternCache) -> usize {
    let total: usize = result
        .queries
        .windows(2)
        .map(|pair| pair_proximity(result, &pair[0], &pair[1], bound, patterns))
        .sum();
    total.min(bound)
}

/// Distinct terms whose literal text occurs as a whole word in a field the
/// term matched.
pub fn count_exact(result: &SearchResult, patterns: &mut PatternCache) -> usize {
    let mut exact: BTreeSet<&str> = BTreeSet::new();
    for query in &result.queries {
        let found = query.fields().into_iter().any(|field| {
            result
                .record
                .field(field)
                .is_some_and(|text| patterns.is_match(&query.term, text))
        });
        if found {
            exact.insert(query.term.as_str());
        }
    }
    exact.len()
}
