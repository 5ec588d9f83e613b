//! Tests for loading sites and record files from disk.

use std::fs;

use crate::common::{create_temp_dir, write_site};
use sectra::build::{load_site_with_progress, SiteXref};
use sectra::{load_site, read_records, records_from_documents, write_records, Error, SearchConfig};

#[test]
fn test_load_site_skips_missing_pages_in_order() {
    let dir = create_temp_dir();
    let site = write_site(dir.path());
    let docs = load_site(&site, &SearchConfig::default()).unwrap();

    let slugs: Vec<_> = docs.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["orbits", "maneuvers", "index"]);
}

#[test]
fn test_progress_loader_matches_plain_loader() {
    let dir = create_temp_dir();
    let site = write_site(dir.path());
    let config = SearchConfig::default();
    let plain = load_site(&site, &config).unwrap();
    let with_progress = load_site_with_progress(&site, &config).unwrap();
    assert_eq!(plain, with_progress);
}

#[test]
fn test_xref_lists_only_pages() {
    let dir = create_temp_dir();
    let site = write_site(dir.path());
    let xref = SiteXref::load(&site).unwrap();
    assert_eq!(xref.references.len(), 5);
    assert_eq!(xref.page_paths(&site).len(), 4);
}

#[test]
fn test_missing_xref_is_an_error() {
    let dir = create_temp_dir();
    let err = load_site(dir.path(), &SearchConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "unexpected error: {}", err);
}

#[test]
fn test_malformed_xref_is_an_error() {
    let dir = create_temp_dir();
    fs::write(dir.path().join("myst.xref.json"), "{not json").unwrap();
    let err = load_site(dir.path(), &SearchConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Json { .. }), "unexpected error: {}", err);
}

#[test]
fn test_pruned_code_stays_out_of_records() {
    let dir = create_temp_dir();
    let site = write_site(dir.path());
    let docs = load_site(&site, &SearchConfig::default()).unwrap();
    let orbits = &docs[0];
    assert!(!orbits.body_corpus.text.contains("sqrt"));
    assert_eq!(
        orbits.body_corpus.text,
        "Intro to orbits.\nTotal delta needed for transfer.\nTwo burns at apogee and perigee.\n"
    );
    assert_eq!(orbits.digest, crc32fast_digest(&orbits.body_corpus.text));
}

#[test]
fn test_record_file_round_trip() {
    let dir = create_temp_dir();
    let site = write_site(dir.path());
    let docs = load_site(&site, &SearchConfig::default()).unwrap();
    let records = records_from_documents(&docs).unwrap();

    let path = dir.path().join("records.json");
    write_records(&path, &records).unwrap();
    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"type\": \"lvl2\""));
    assert!(json.contains("\"hierarchy\""));

    assert_eq!(read_records(&path).unwrap(), records);
}

fn crc32fast_digest(text: &str) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(text.as_bytes());
    hasher.finalize()
}
