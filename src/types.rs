// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a section-aware search index.
//!
//! A page is split into [`Section`]s at heading boundaries. Each section turns
//! into two [`SearchRecord`]s (one for the heading, one for the body text)
//! that share a [`DocumentHierarchy`] breadcrumb. The external index answers
//! per-term lookups with [`RawHit`]s, the combiner folds them into
//! [`SearchResult`]s, and the ranker attaches a [`Ranking`].
//!
//! # Invariants
//!
//! - **Corpus**: `stops` is non-decreasing and has one entry per section.
//!   `stops[last] <= text.chars().count()`.
//! - **SearchRecord**: `position` is `2 * section` for heading records and
//!   `2 * section + 1` for content records, so positions are unique within
//!   a page and reflect on-page order.
//! - **SearchResult**: `queries` is never empty; it has one entry per query
//!   term, in the order the terms were issued.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::Error;

// =============================================================================
// HEADING LEVELS
// =============================================================================

/// Structural heading depth, `h1` through `h6`.
///
/// Constructed from a raw depth with [`HeadingLevel::from_depth`], which
/// rejects anything outside `1..=6`. Serializes as the bare depth number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    Lvl1,
    Lvl2,
    Lvl3,
    Lvl4,
    Lvl5,
    Lvl6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::Lvl1,
        HeadingLevel::Lvl2,
        HeadingLevel::Lvl3,
        HeadingLevel::Lvl4,
        HeadingLevel::Lvl5,
        HeadingLevel::Lvl6,
    ];

    /// Validate a raw depth. Unknown depths are a data error, not a default.
    pub fn from_depth(depth: u8) -> Result<Self, Error> {
        match depth {
            1 => Ok(HeadingLevel::Lvl1),
            2 => Ok(HeadingLevel::Lvl2),
            3 => Ok(HeadingLevel::Lvl3),
            4 => Ok(HeadingLevel::Lvl4),
            5 => Ok(HeadingLevel::Lvl5),
            6 => Ok(HeadingLevel::Lvl6),
            _ => Err(Error::InvalidHeadingDepth { depth }),
        }
    }

    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::Lvl1 => 1,
            HeadingLevel::Lvl2 => 2,
            HeadingLevel::Lvl3 => 3,
            HeadingLevel::Lvl4 => 4,
            HeadingLevel::Lvl5 => 5,
            HeadingLevel::Lvl6 => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeadingLevel::Lvl1 => "lvl1",
            HeadingLevel::Lvl2 => "lvl2",
            HeadingLevel::Lvl3 => "lvl3",
            HeadingLevel::Lvl4 => "lvl4",
            HeadingLevel::Lvl5 => "lvl5",
            HeadingLevel::Lvl6 => "lvl6",
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(depth: u8) -> Result<Self, Self::Error> {
        HeadingLevel::from_depth(depth)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.depth()
    }
}

// =============================================================================
// SEARCHABLE FIELDS
// =============================================================================

/// A searchable attribute of a record.
///
/// The derived `Ord` is the attribute priority: `hierarchy.lvl1` first,
/// `content` last. [`SEARCH_ATTRIBUTES_ORDERED`] lists them in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "hierarchy.lvl1")]
    Lvl1,
    #[serde(rename = "hierarchy.lvl2")]
    Lvl2,
    #[serde(rename = "hierarchy.lvl3")]
    Lvl3,
    #[serde(rename = "hierarchy.lvl4")]
    Lvl4,
    #[serde(rename = "hierarchy.lvl5")]
    Lvl5,
    #[serde(rename = "hierarchy.lvl6")]
    Lvl6,
    #[serde(rename = "content")]
    Content,
}

/// Attribute priority list, best first.
pub const SEARCH_ATTRIBUTES_ORDERED: [Field; 7] = [
    Field::Lvl1,
    Field::Lvl2,
    Field::Lvl3,
    Field::Lvl4,
    Field::Lvl5,
    Field::Lvl6,
    Field::Content,
];

impl Field {
    /// Field holding the breadcrumb text for a heading level.
    pub fn for_level(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::Lvl1 => Field::Lvl1,
            HeadingLevel::Lvl2 => Field::Lvl2,
            HeadingLevel::Lvl3 => Field::Lvl3,
            HeadingLevel::Lvl4 => Field::Lvl4,
            HeadingLevel::Lvl5 => Field::Lvl5,
            HeadingLevel::Lvl6 => Field::Lvl6,
        }
    }

    /// Index into [`SEARCH_ATTRIBUTES_ORDERED`].
    #[inline]
    pub fn priority(self) -> usize {
        self as usize
    }

    /// Positional fields are ordered text where match offsets mean something.
    /// Breadcrumb fields are short labels and are not positional.
    #[inline]
    pub fn is_positional(self) -> bool {
        matches!(self, Field::Content)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Lvl1 => "hierarchy.lvl1",
            Field::Lvl2 => "hierarchy.lvl2",
            Field::Lvl3 => "hierarchy.lvl3",
            Field::Lvl4 => "hierarchy.lvl4",
            Field::Lvl5 => "hierarchy.lvl5",
            Field::Lvl6 => "hierarchy.lvl6",
            Field::Content => "content",
        }
    }
}

// =============================================================================
// SECTIONS AND CORPORA
// =============================================================================

/// Text and anchor of the heading that opened a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingInfo {
    pub text: String,
    pub depth: HeadingLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_id: Option<String>,
}

/// A run of page content between two heading boundaries.
///
/// The first section of every page has no heading: it holds whatever comes
/// before the first heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<HeadingInfo>,
    pub parts: Vec<String>,
}

impl Section {
    /// All parts concatenated, paragraph separators included.
    pub fn content(&self) -> String {
        self.parts.concat()
    }
}

/// A flat searchable string plus the offsets where each section ends.
///
/// `stops[i]` is the character (not byte) offset just past section `i`'s
/// contribution. Separators inserted between sections belong to the gap, not
/// to either section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub text: String,
    pub stops: Vec<usize>,
}

/// Breadcrumb trail of enclosing headings for one section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHierarchy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lvl1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lvl2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lvl3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lvl4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lvl5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lvl6: Option<String>,
}

impl DocumentHierarchy {
    pub fn get(&self, level: HeadingLevel) -> Option<&str> {
        match level {
            HeadingLevel::Lvl1 => self.lvl1.as_deref(),
            HeadingLevel::Lvl2 => self.lvl2.as_deref(),
            HeadingLevel::Lvl3 => self.lvl3.as_deref(),
            HeadingLevel::Lvl4 => self.lvl4.as_deref(),
            HeadingLevel::Lvl5 => self.lvl5.as_deref(),
            HeadingLevel::Lvl6 => self.lvl6.as_deref(),
        }
    }

    pub fn set(&mut self, level: HeadingLevel, text: String) {
        let slot = match level {
            HeadingLevel::Lvl1 => &mut self.lvl1,
            HeadingLevel::Lvl2 => &mut self.lvl2,
            HeadingLevel::Lvl3 => &mut self.lvl3,
            HeadingLevel::Lvl4 => &mut self.lvl4,
            HeadingLevel::Lvl5 => &mut self.lvl5,
            HeadingLevel::Lvl6 => &mut self.lvl6,
        };
        *slot = Some(text);
    }

    /// Populated levels, shallowest first.
    pub fn trail(&self) -> impl Iterator<Item = (HeadingLevel, &str)> + '_ {
        HeadingLevel::ALL
            .into_iter()
            .filter_map(move |level| self.get(level).map(|text| (level, text)))
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// What a record stands for: a heading, or the body text under it.
///
/// Heading records carry their level in the tag (`"lvl2"`); content records
/// carry the section text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordKind {
    Lvl1,
    Lvl2,
    Lvl3,
    Lvl4,
    Lvl5,
    Lvl6,
    Content { content: String },
}

impl RecordKind {
    pub fn heading(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::Lvl1 => RecordKind::Lvl1,
            HeadingLevel::Lvl2 => RecordKind::Lvl2,
            HeadingLevel::Lvl3 => RecordKind::Lvl3,
            HeadingLevel::Lvl4 => RecordKind::Lvl4,
            HeadingLevel::Lvl5 => RecordKind::Lvl5,
            HeadingLevel::Lvl6 => RecordKind::Lvl6,
        }
    }

    /// Heading level for heading records, `None` for content.
    pub fn level(&self) -> Option<HeadingLevel> {
        match self {
            RecordKind::Lvl1 => Some(HeadingLevel::Lvl1),
            RecordKind::Lvl2 => Some(HeadingLevel::Lvl2),
            RecordKind::Lvl3 => Some(HeadingLevel::Lvl3),
            RecordKind::Lvl4 => Some(HeadingLevel::Lvl4),
            RecordKind::Lvl5 => Some(HeadingLevel::Lvl5),
            RecordKind::Lvl6 => Some(HeadingLevel::Lvl6),
            RecordKind::Content { .. } => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.level() {
            Some(level) => level.as_str(),
            None => "content",
        }
    }
}

/// One indexable unit: a section's heading or its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: String,
    #[serde(flatten)]
    pub kind: RecordKind,
    pub hierarchy: DocumentHierarchy,
    pub url: String,
    pub position: usize,
}

impl SearchRecord {
    /// Value of a searchable field, if the record has one.
    ///
    /// Heading records have no `content` field.
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Lvl1 => self.hierarchy.lvl1.as_deref(),
            Field::Lvl2 => self.hierarchy.lvl2.as_deref(),
            Field::Lvl3 => self.hierarchy.lvl3.as_deref(),
            Field::Lvl4 => self.hierarchy.lvl4.as_deref(),
            Field::Lvl5 => self.hierarchy.lvl5.as_deref(),
            Field::Lvl6 => self.hierarchy.lvl6.as_deref(),
            Field::Content => match &self.kind {
                RecordKind::Content { content } => Some(content),
                _ => None,
            },
        }
    }

    /// Text a result list shows for this record: the heading's own text for
    /// heading records, the section body for content records.
    pub fn display_text(&self) -> &str {
        match self.kind.level() {
            Some(level) => self.hierarchy.get(level).unwrap_or(""),
            None => self.field(Field::Content).unwrap_or(""),
        }
    }
}

// =============================================================================
// QUERY RESULTS
// =============================================================================

/// Matched token → fields it was found in.
pub type TokenMatches = BTreeMap<String, BTreeSet<Field>>;

/// What the external index reports for one term in one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHit {
    pub record: SearchRecord,
    pub matches: TokenMatches,
}

/// How one query term matched one record.
///
/// `matches` keys are the literal term or fuzzy/prefix variants of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub term: String,
    pub matches: TokenMatches,
}

impl Query {
    /// Every field any token of this term landed in.
    pub fn fields(&self) -> BTreeSet<Field> {
        self.matches.values().flatten().copied().collect()
    }
}

/// A record that matched every query term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub record: SearchRecord,
    pub queries: Vec<Query>,
}

/// Relevance tuple, recomputed on every search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    /// Best-priority field that received any match.
    pub attribute: Field,
    /// Character offset of the earliest match in `attribute`, when positional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Distinct non-literal tokens, summed over terms.
    pub typos: usize,
    /// Separator distance between consecutive terms, capped at the bound.
    pub proximity: usize,
    /// Terms whose literal text appears as a whole word.
    pub exact: usize,
    /// Weight of the record's own type.
    pub level: u8,
    /// The record's on-page position.
    pub appearance: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSearchResult {
    #[serde(flatten)]
    pub result: SearchResult,
    pub ranking: Ranking,
}
