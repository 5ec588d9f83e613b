// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use std::collections::BTreeSet;

use crate::tree::Node;
use crate::types::{
    DocumentHierarchy, Field, Query, RawHit, RecordKind, SearchRecord, SearchResult,
    TokenMatches,
};

// ============================================================================
// TREE NODES
// ============================================================================

/// A parent node of any type.
pub fn node(node_type: &str, children: Vec<Node>) -> Node {
    Node {
        node_type: node_type.to_string(),
        children,
        ..Default::default()
    }
}

pub fn root(children: Vec<Node>) -> Node {
    node("root", children)
}

pub fn paragraph(children: Vec<Node>) -> Node {
    node("paragraph", children)
}

pub fn emphasis(children: Vec<Node>) -> Node {
    node("emphasis", children)
}

/// A literal text leaf.
pub fn text(value: &str) -> Node {
    Node {
        node_type: "text".to_string(),
        value: Some(value.to_string()),
        ..Default::default()
    }
}

/// A heading with a single text child.
pub fn heading(depth: u8, title: &str, id: Option<&str>) -> Node {
    Node {
        node_type: "heading".to_string(),
        children: vec![text(title)],
        depth: Some(depth),
        identifier: id.map(str::to_string),
        ..Default::default()
    }
}

// ============================================================================
// RECORDS AND HITS
// ============================================================================

/// A record on page `/doc` with only `lvl1` set.
///
/// `content: None` makes a `lvl1` heading record.
pub fn make_record(id: &str, position: usize, content: Option<&str>) -> SearchRecord {
    let kind = match content {
        Some(content) => RecordKind::Content {
            content: content.to_string(),
        },
        None => RecordKind::Lvl1,
    };
    SearchRecord {
        id: id.to_string(),
        kind,
        hierarchy: DocumentHierarchy {
            lvl1: Some("Doc".to_string()),
            ..Default::default()
        },
        url: "/doc".to_string(),
        position,
    }
}

/// Token matches from `(token, fields)` pairs.
pub fn make_matches(pairs: &[(&str, &[Field])]) -> TokenMatches {
    pairs
        .iter()
        .map(|(token, fields)| {
            (
                token.to_string(),
                fields.iter().copied().collect::<BTreeSet<_>>(),
            )
        })
        .collect()
}

pub fn make_hit(record: &SearchRecord, pairs: &[(&str, &[Field])]) -> RawHit {
    RawHit {
        record: record.clone(),
        matches: make_matches(pairs),
    }
}

pub fn make_query(term: &str, pairs: &[(&str, &[Field])]) -> Query {
    Query {
        term: term.to_string(),
        matches: make_matches(pairs),
    }
}

/// A combined result with one query per entry of `queries`.
pub fn make_result(record: SearchRecord, queries: Vec<Query>) -> SearchResult {
    SearchResult { record, queries }
}
