//! Tests for corpus offsets and section lookup.

use sectra::build::corpus::bisect_left;
use sectra::{build_corpus, Error};

#[test]
fn test_heading_corpus_skips_separator_for_empty_slots() {
    // Section 0 never has a heading, so its slot is empty
    let headings = vec![[""], ["Delta-V Budget"], ["Hohmann Transfer"]];
    let corpus = build_corpus(&headings, Some(" "));
    assert_eq!(corpus.text, "Delta-V Budget Hohmann Transfer");
    assert_eq!(corpus.stops, vec![0, 14, 31]);
}

#[test]
fn test_every_offset_maps_back_to_its_section() {
    let sections = vec![vec!["Intro."], vec!["Total.", "\n"], vec!["Two burns."]];
    let corpus = build_corpus(&sections, Some(" "));
    let ranges = corpus.section_ranges(Some(" "));

    for (section, range) in ranges.iter().enumerate() {
        for c in range.clone() {
            assert_eq!(
                corpus.section_of_char(c).unwrap(),
                section,
                "char {} should belong to section {}",
                c,
                section
            );
        }
    }
}

#[test]
fn test_separator_resolves_to_next_section() {
    let corpus = build_corpus(&[["ab"], ["cd"]], Some(" "));
    assert_eq!(corpus.text, "ab cd");
    assert_eq!(corpus.section_of_char(2).unwrap(), 1);
    assert_eq!(corpus.section_at_offset(2).unwrap(), 0);
}

#[test]
fn test_offsets_count_characters_not_bytes() {
    let corpus = build_corpus(&[["Δv"], ["café"]], None);
    assert_eq!(corpus.stops, vec![2, 6]);
    assert_eq!(corpus.char_len(), 6);
    assert_eq!(corpus.section_text(1, None).unwrap(), "café");
}

#[test]
fn test_out_of_range_lookups() {
    let corpus = build_corpus(&[["abc"]], None);
    assert!(matches!(
        corpus.section_at_offset(4),
        Err(Error::OffsetOutOfRange { offset: 4, len: 3 })
    ));
    assert!(matches!(
        corpus.section_of_char(3),
        Err(Error::OffsetOutOfRange { .. })
    ));
    assert!(matches!(
        corpus.section_text(1, None),
        Err(Error::SectionOutOfRange { index: 1, len: 1 })
    ));
}

#[test]
fn test_bisect_left_finds_leftmost() {
    let stops = [0, 14, 14, 31];
    assert_eq!(bisect_left(&stops, &0), 0);
    assert_eq!(bisect_left(&stops, &14), 1);
    assert_eq!(bisect_left(&stops, &15), 3);
    assert_eq!(bisect_left(&stops, &40), 4);
}
