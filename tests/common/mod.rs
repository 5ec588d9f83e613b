//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sectra::{
    load_site, records_from_documents, search, DefaultTokenizer, MemoryIndex, RankedSearchResult,
    SearchConfig, SearchRecord,
};

// Re-export canonical test utilities from sectra::testing
pub use sectra::testing::{
    heading, make_hit, make_query, make_record, make_result, paragraph, root, text,
};

// ============================================================================
// SITE FIXTURE
// ============================================================================

pub const ORBITS_PAGE: &str = r#"{
    "slug": "orbits",
    "frontmatter": {"title": "Orbital Mechanics"},
    "mdast": {"type": "root", "children": [
        {"type": "paragraph", "children": [{"type": "text", "value": "Intro to orbits."}]},
        {"type": "heading", "depth": 2, "identifier": "delta-v-budget",
         "children": [{"type": "text", "value": "Delta-V Budget"}]},
        {"type": "paragraph", "children": [{"type": "text", "value": "Total delta needed for transfer."}]},
        {"type": "heading", "depth": 3, "identifier": "hohmann-transfer",
         "children": [{"type": "text", "value": "Hohmann Transfer"}]},
        {"type": "paragraph", "children": [{"type": "text", "value": "Two burns at apogee and perigee."}]},
        {"type": "code", "value": "dv = sqrt(mu / r)"}
    ]}
}"#;

pub const MANEUVERS_PAGE: &str = r#"{
    "slug": "maneuvers",
    "frontmatter": {"title": "Maneuvers"},
    "mdast": {"type": "root", "children": [
        {"type": "heading", "depth": 2, "html-id": "burn-sequence",
         "children": [{"type": "text", "value": "Burn Sequence"}]},
        {"type": "paragraph", "children": [{"type": "text", "value": "The burn sequence starts at apogee."}]},
        {"type": "heading", "depth": 2, "identifier": "strategy",
         "children": [{"type": "text", "value": "Strategy"}]},
        {"type": "paragraph", "children": [{"type": "text", "value": "A strategy for every burn."}]}
    ]}
}"#;

pub const INDEX_PAGE: &str = r#"{
    "slug": "index",
    "frontmatter": {"title": "Mission Docs"},
    "mdast": {"type": "root", "children": [
        {"type": "paragraph", "children": [{"type": "text", "value": "Welcome aboard. Pick a strat and fly."}]}
    ]}
}"#;

pub const XREF: &str = r#"{
    "version": "1",
    "myst": "1.3.0",
    "references": [
        {"kind": "page", "url": "/orbits", "data": "/content/orbits.json"},
        {"kind": "heading", "url": "/orbits", "identifier": "delta-v-budget"},
        {"kind": "page", "url": "/maneuvers", "data": "/content/maneuvers.json"},
        {"kind": "page", "url": "/", "data": "/content/index.json"},
        {"kind": "page", "url": "/gone", "data": "/content/gone.json"}
    ]
}"#;

/// Create a temporary directory for site files or outputs.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().expect("Failed to create temp directory")
}

/// Write the three-page fixture site. `gone.json` is listed but missing.
pub fn write_site(dir: &Path) -> PathBuf {
    let content = dir.join("content");
    fs::create_dir_all(&content).expect("Failed to create content dir");
    fs::write(dir.join("myst.xref.json"), XREF).expect("Failed to write xref");
    fs::write(content.join("orbits.json"), ORBITS_PAGE).expect("Failed to write page");
    fs::write(content.join("maneuvers.json"), MANEUVERS_PAGE).expect("Failed to write page");
    fs::write(content.join("index.json"), INDEX_PAGE).expect("Failed to write page");
    dir.to_path_buf()
}

/// Write the fixture site and load its records.
///
/// Returns the TempDir (to keep it alive) and the records.
pub fn fixture_records(config: &SearchConfig) -> (tempfile::TempDir, Vec<SearchRecord>) {
    let dir = create_temp_dir();
    let site = write_site(dir.path());
    let docs = load_site(&site, config).expect("Fixture site should load");
    let records = records_from_documents(&docs).expect("Fixture records should build");
    (dir, records)
}

/// Rank `query` over the fixture site with default settings.
pub fn search_fixture(query: &str) -> Vec<RankedSearchResult> {
    let config = SearchConfig::default();
    let (_dir, records) = fixture_records(&config);
    let index = MemoryIndex::new(records, &DefaultTokenizer, &config);
    search(&index, &DefaultTokenizer, query, config.proximity_bound)
}

pub fn ids(ranked: &[RankedSearchResult]) -> Vec<&str> {
    ranked.iter().map(|r| r.result.record.id.as_str()).collect()
}
