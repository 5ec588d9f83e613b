//! Tests for record emission over the fixture site.

use std::collections::BTreeSet;

use crate::common::fixture_records;
use sectra::{Field, RecordKind, SearchConfig};

#[test]
fn test_two_records_per_section_across_site() {
    let (_dir, records) = fixture_records(&SearchConfig::default());
    // orbits: 3 sections, maneuvers: 3, index: 1
    assert_eq!(records.len(), 14);

    let ids: BTreeSet<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), records.len(), "record ids must be unique");
}

#[test]
fn test_heading_and_content_records_share_breadcrumb() {
    let (_dir, records) = fixture_records(&SearchConfig::default());
    let heading = records.iter().find(|r| r.id == "/orbits#4").unwrap();
    let content = records.iter().find(|r| r.id == "/orbits#5").unwrap();

    assert_eq!(heading.kind, RecordKind::Lvl3);
    assert_eq!(heading.url, "/orbits#hohmann-transfer");
    assert_eq!(heading.hierarchy, content.hierarchy);
    assert_eq!(heading.hierarchy.lvl1.as_deref(), Some("Orbital Mechanics"));
    assert_eq!(heading.hierarchy.lvl2.as_deref(), Some("Delta-V Budget"));
    assert_eq!(heading.hierarchy.lvl3.as_deref(), Some("Hohmann Transfer"));
    assert_eq!(
        content.field(Field::Content),
        Some("Two burns at apogee and perigee.\n")
    );
}

#[test]
fn test_html_id_wins_over_identifier() {
    let (_dir, records) = fixture_records(&SearchConfig::default());
    let burn = records.iter().find(|r| r.id == "/maneuvers#2").unwrap();
    assert_eq!(burn.url, "/maneuvers#burn-sequence");
}

#[test]
fn test_empty_lead_section_still_emits_records() {
    let (_dir, records) = fixture_records(&SearchConfig::default());
    let lead = records.iter().find(|r| r.id == "/maneuvers#1").unwrap();
    assert_eq!(lead.field(Field::Content), Some(""));
    assert_eq!(lead.url, "/maneuvers");
}

#[test]
fn test_base_url_and_index_slug() {
    let config = SearchConfig {
        base_url: "https://docs.example.org".to_string(),
        ..Default::default()
    };
    let (_dir, records) = fixture_records(&config);
    let home = records
        .iter()
        .find(|r| r.hierarchy.lvl1.as_deref() == Some("Mission Docs"))
        .unwrap();
    assert_eq!(home.url, "https://docs.example.org/");
    assert_eq!(home.id, "https://docs.example.org/#0");
}
