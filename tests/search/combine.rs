//! Tests for AND-merging per-term hits.

use std::collections::BTreeMap;

use crate::common::{make_hit, make_record};
use sectra::{combine_results, search, DefaultTokenizer, Field, RawHit};

type TermTable = BTreeMap<String, RawHit>;

fn hits(term: &str, ids: &[usize]) -> TermTable {
    ids.iter()
        .map(|&i| {
            let record = make_record(&format!("/doc#{}", i), i, Some(term));
            (record.id.clone(), make_hit(&record, &[(term, &[Field::Content])]))
        })
        .collect()
}

#[test]
fn test_only_records_hit_by_every_term_survive() {
    let results = combine_results(vec![
        ("alpha".to_string(), hits("alpha", &[1, 2, 3])),
        ("beta".to_string(), hits("beta", &[2, 3, 4])),
    ]);
    let ids: Vec<_> = results.iter().map(|r| r.record.id.as_str()).collect();
    assert_eq!(ids, vec!["/doc#2", "/doc#3"]);
}

#[test]
fn test_each_result_keeps_every_terms_matches() {
    let results = combine_results(vec![
        ("alpha".to_string(), hits("alpha", &[5])),
        ("beta".to_string(), hits("beta", &[5])),
    ]);
    let queries = &results[0].queries;
    assert_eq!(queries.len(), 2);
    assert!(queries[0].matches.contains_key("alpha"));
    assert!(queries[1].matches.contains_key("beta"));
}

#[test]
fn test_fixed_term_table_as_index() {
    let mut table: BTreeMap<String, TermTable> = BTreeMap::new();
    table.insert("alpha".to_string(), hits("alpha", &[1, 2]));
    table.insert("beta".to_string(), hits("beta", &[2]));

    let ranked = search(&table, &DefaultTokenizer, "alpha beta", 8);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].result.record.id, "/doc#2");

    assert!(search(&table, &DefaultTokenizer, "alpha gamma", 8).is_empty());
}
