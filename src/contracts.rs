// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index builders and the ranker.
//!
//! Debug-mode assertions over the structures this crate produces. They are
//! zero-cost in release builds (`debug_assert!`) and fail early in tests.
//!
//! | Contract                        | Property                                       |
//! |---------------------------------|------------------------------------------------|
//! | `check_corpus_well_formed`      | stops non-decreasing, one per section, in text |
//! | `check_positions_unique`        | record positions are `2i` / `2i + 1`           |
//! | `check_hierarchy_monotone`      | breadcrumb levels respect document order       |
//! | `check_ranking_consistent`      | ranking tuple agrees with its result           |
//! | `check_sorted_by`               | ranked output obeys the comparator             |

use std::cmp::Ordering;

use crate::types::{Corpus, Field, Ranking, SearchRecord, SearchResult};

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // Every heading weight beats content, and shallower headings weigh more.
    let weights = crate::scoring::LEVEL_WEIGHTS;
    let mut i = 1;
    while i < weights.len() {
        assert!(weights[i - 1] > weights[i]);
        i += 1;
    }
    assert!(weights[weights.len() - 1] > crate::scoring::CONTENT_WEIGHT);
};

// ============================================================================
// CORPUS CONTRACTS
// ============================================================================

/// Check that a corpus satisfies its offset invariant.
///
/// # Panics (debug builds only)
/// Panics if `stops` decreases, has the wrong length, or points past the text.
#[inline]
pub fn check_corpus_well_formed(corpus: &Corpus, n_sections: usize) {
    debug_assert_eq!(
        corpus.stops.len(),
        n_sections,
        "Contract violation: Corpus - {} stops for {} sections",
        corpus.stops.len(),
        n_sections
    );

    for i in 1..corpus.stops.len() {
        debug_assert!(
            corpus.stops[i - 1] <= corpus.stops[i],
            "Contract violation: Corpus - stops[{}] = {} > stops[{}] = {}",
            i - 1,
            corpus.stops[i - 1],
            i,
            corpus.stops[i]
        );
    }

    if let Some(&last) = corpus.stops.last() {
        debug_assert!(
            last <= corpus.text.chars().count(),
            "Contract violation: Corpus - last stop {} past text length {}",
            last,
            corpus.text.chars().count()
        );
    }
}

// ============================================================================
// RECORD CONTRACTS
// ============================================================================

/// Check that one page's records are laid out as heading/content pairs.
#[inline]
pub fn check_positions_unique(records: &[SearchRecord]) {
    for (i, record) in records.iter().enumerate() {
        debug_assert_eq!(
            record.position, i,
            "Contract violation: SearchRecord - record {} has position {}",
            i, record.position
        );
        debug_assert_eq!(
            record.kind.level().is_none(),
            i % 2 == 1,
            "Contract violation: SearchRecord - position {} holds a {} record",
            i,
            record.kind.as_str()
        );
    }
}

/// Check that populated breadcrumb levels come from headings in document order.
///
/// `origins[d]` is the section index that produced `lvl{d + 1}`, if any.
#[inline]
pub fn check_hierarchy_monotone(origins: &[Option<usize>; 6]) {
    let mut previous: Option<usize> = None;
    for (depth, origin) in origins.iter().enumerate() {
        if let Some(origin) = origin {
            if let Some(previous) = previous {
                debug_assert!(
                    previous <= *origin,
                    "Contract violation: DocumentHierarchy - lvl{} from section {} precedes its parent from section {}",
                    depth + 1,
                    origin,
                    previous
                );
            }
            previous = Some(*origin);
        }
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a ranking tuple is consistent with the result it was computed for.
#[inline]
pub fn check_ranking_consistent(result: &SearchResult, ranking: &Ranking, bound: usize) {
    debug_assert!(
        !result.queries.is_empty(),
        "Contract violation: SearchResult - '{}' has no queries",
        result.record.id
    );
    debug_assert!(
        ranking.proximity <= bound,
        "Contract violation: Ranking - proximity {} exceeds bound {}",
        ranking.proximity,
        bound
    );
    debug_assert!(
        ranking.exact <= result.queries.len(),
        "Contract violation: Ranking - exact {} exceeds {} terms",
        ranking.exact,
        result.queries.len()
    );
    debug_assert!(
        ranking.position.is_none() || ranking.attribute == Field::Content,
        "Contract violation: Ranking - position set for non-positional {}",
        ranking.attribute.as_str()
    );
    debug_assert_eq!(
        ranking.appearance, result.record.position,
        "Contract violation: Ranking - appearance differs from record position"
    );
}

/// Check that a slice is sorted under `compare`.
#[inline]
pub fn check_sorted_by<T, F>(items: &[T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        debug_assert!(
            compare(&items[i - 1], &items[i]) != Ordering::Greater,
            "Contract violation: ranked results out of order at {}",
            i
        );
    }
}
