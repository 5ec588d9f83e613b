//! Tests for ranking criteria and their precedence.

use std::cmp::Ordering;

use crate::common::{make_query, make_record, make_result};
use sectra::{compare_rankings, rank_results, DocumentHierarchy, Field, RecordKind, SearchRecord};

const C: &[Field] = &[Field::Content];

fn lvl2_record(id: &str, position: usize, heading: &str) -> SearchRecord {
    let mut record = make_record(id, position, None);
    record.kind = RecordKind::Lvl2;
    record.hierarchy = DocumentHierarchy {
        lvl1: Some("Doc".to_string()),
        lvl2: Some(heading.to_string()),
        ..Default::default()
    };
    record
}

#[test]
fn test_heading_match_beats_content_match() {
    let heading = make_result(
        lvl2_record("/doc#2", 2, "Delta-V Budget"),
        vec![make_query("delta", &[("delta", &[Field::Lvl2])])],
    );
    let content = make_result(
        make_record("/doc#1", 1, Some("delta first in text")),
        vec![make_query("delta", &[("delta", C)])],
    );
    let ranked = rank_results(vec![content, heading], 8);
    assert_eq!(ranked[0].result.record.id, "/doc#2");
    assert_eq!(ranked[0].ranking.attribute, Field::Lvl2);
    assert_eq!(ranked[0].ranking.level, 80);
    assert_eq!(ranked[1].ranking.attribute, Field::Content);
    assert_eq!(ranked[1].ranking.position, Some(0));
}

#[test]
fn test_fewer_typos_beat_better_attribute() {
    let typo_heading = make_result(
        lvl2_record("/doc#2", 2, "Strategy"),
        vec![make_query("strat", &[("strategy", &[Field::Lvl2])])],
    );
    let literal_content = make_result(
        make_record("/doc#9", 9, Some("pick a strat")),
        vec![make_query("strat", &[("strat", C)])],
    );
    let ranked = rank_results(vec![typo_heading, literal_content], 8);
    assert_eq!(ranked[0].result.record.id, "/doc#9");
    assert_eq!(ranked[1].ranking.typos, 1);
}

#[test]
fn test_earlier_content_match_ranks_first() {
    let late = make_result(
        make_record("/a#1", 1, Some("one two three burn")),
        vec![make_query("burn", &[("burn", C)])],
    );
    let early = make_result(
        make_record("/b#3", 3, Some("burn one two three")),
        vec![make_query("burn", &[("burn", C)])],
    );
    let ranked = rank_results(vec![late, early], 8);
    assert_eq!(ranked[0].result.record.id, "/b#3");
    assert_eq!(ranked[0].ranking.position, Some(0));
    assert_eq!(ranked[1].ranking.position, Some(14));
}

#[test]
fn test_appearance_breaks_remaining_ties() {
    let make = |id: &str, position: usize| {
        make_result(
            make_record(id, position, Some("burn")),
            vec![make_query("burn", &[("burn", C)])],
        )
    };
    let ranked = rank_results(vec![make("/a#7", 7), make("/a#3", 3)], 8);
    assert_eq!(ranked[0].ranking.appearance, 3);
    assert_eq!(
        compare_rankings(&ranked[0].ranking, &ranked[1].ranking),
        Ordering::Less
    );
}

#[test]
fn test_ranking_is_deterministic() {
    let build = || {
        vec![
            make_result(
                make_record("/a#1", 1, Some("burn the sequence")),
                vec![
                    make_query("burn", &[("burn", C)]),
                    make_query("sequence", &[("sequence", C)]),
                ],
            ),
            make_result(
                lvl2_record("/a#2", 2, "Burn Sequence"),
                vec![
                    make_query("burn", &[("burn", &[Field::Lvl2])]),
                    make_query("sequence", &[("sequence", &[Field::Lvl2])]),
                ],
            ),
        ]
    };
    assert_eq!(rank_results(build(), 8), rank_results(build(), 8));
}
