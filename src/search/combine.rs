// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! AND-merge of per-term hits.
//!
//! A record survives only if every term reached it. Each survivor carries one
//! [`Query`] per term, in the order the terms were issued.

use std::collections::BTreeMap;

use crate::types::{Query, RawHit, SearchResult};

/// Merge per-term hit tables into results that matched every term.
///
/// `term_hits` yields `(term, hits keyed by record id)` in query order.
/// No terms, or any term without hits, gives no results. Output is ordered
/// by record id.
pub fn combine_results<I>(term_hits: I) -> Vec<SearchResult>
where
    I: IntoIterator<Item = (String, BTreeMap<String, RawHit>)>,
{
    let mut terms = term_hits.into_iter();
    let Some((term, first)) = terms.next() else {
        return Vec::new();
    };

    let mut combined: BTreeMap<String, SearchResult> = first
        .into_iter()
        .map(|(id, hit)| {
            let result = SearchResult {
                record: hit.record,
                queries: vec![Query {
                    term: term.clone(),
                    matches: hit.matches,
                }],
            };
            (id, result)
        })
        .collect();

    for (term, mut hits) in terms {
        combined = combined
            .into_iter()
            .filter_map(|(id, mut result)| {
                let hit = hits.remove(&id)?;
                result.queries.push(Query {
                    term: term.clone(),
                    matches: hit.matches,
                });
                Some((id, result))
            })
            .collect();
    }

    combined.into_values().collect()
}
