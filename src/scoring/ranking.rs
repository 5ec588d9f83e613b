// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: from a bag of AND-merged results to a total order.
//!
//! Sort order, earlier criteria dominate:
//! 1. **typos** (fewer first)
//! 2. **attribute** (`hierarchy.lvl1` … `content`)
//! 3. **level** (heavier record type first)
//! 4. **position** within a positional attribute (earlier first, unknown last)
//! 5. **appearance** (on-page order)
//!
//! `proximity` and `exact` are computed and reported but do not sort.

use std::cmp::Ordering;

use crate::contracts::{check_ranking_consistent, check_sorted_by};
use crate::types::{RankedSearchResult, Ranking, SearchResult};

use super::core::{
    count_exact, count_typos, level_weight, matched_attribute_position, proximity, PatternCache,
};

/// Compute the ranking tuple for one result.
pub fn compute_ranking(
    result: &SearchResult,
    proximity_bound: usize,
    patterns: &mut PatternCache,
) -> Ranking {
    let (attribute, position) = matched_attribute_position(result, patterns);
    let ranking = Ranking {
        attribute,
        position,
        typos: count_typos(result),
        proximity: proximity(result, proximity_bound, patterns),
        exact: count_exact(result, patterns),
        level: level_weight(&result.record.kind),
        appearance: result.record.position,
    };
    check_ranking_consistent(result, &ranking, proximity_bound);
    ranking
}

/// Compare two ranking tuples. `Less` means `a` ranks first.
pub fn compare_rankings(a: &Ranking, b: &Ranking) -> Ordering {
    a.typos
        .cmp(&b.typos)
        .then_with(|| a.attribute.cmp(&b.attribute))
        .then_with(|| b.level.cmp(&a.level))
        .then_with(|| compare_positions(a.position, b.position))
        .then_with(|| a.appearance.cmp(&b.appearance))
}

/// Unknown positions sort after known ones.
fn compare_positions(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rank and sort results, most relevant first.
///
/// The sort is stable: results that tie on every criterion keep their input
/// order, so the same input always yields the same output.
pub fn rank_results(results: Vec<SearchResult>, proximity_bound: usize) -> Vec<RankedSearchResult> {
    let mut patterns = PatternCache::new();
    let mut ranked: Vec<RankedSearchResult> = results
        .into_iter()
        .map(|result| {
            let ranking = compute_ranking(&result, proximity_bound, &mut patterns);
            RankedSearchResult { result, ranking }
        })
        .collect();

    ranked.sort_by(|a, b| compare_rankings(&a.ranking, &b.ranking));
    check_sorted_by(&ranked, |a, b| compare_rankings(&a.ranking, &b.ranking));
    ranked
}
