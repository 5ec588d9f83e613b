// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for indexing and ranking.
//!
//! Structural problems (a heading at depth 9, an offset past the end of a
//! corpus) fail fast with one of these instead of being coerced into
//! something plausible. A query that matches nothing is not an error.

use std::path::PathBuf;

/// Everything that can go wrong while building or ranking.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Heading depth outside `1..=6`.
    #[error("heading depth {depth} is outside 1..=6")]
    InvalidHeadingDepth { depth: u8 },

    /// A section index past the end of the section list (or `stops`).
    #[error("section index {index} out of range for {len} sections")]
    SectionOutOfRange { index: usize, len: usize },

    /// A character offset past the end of a corpus.
    #[error("offset {offset} out of range for corpus of {len} characters")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// A heading was required but the section has none.
    #[error("section {index} has no heading")]
    MissingHeading { index: usize },

    /// A page file is missing something the loader needs.
    #[error("invalid document {}: {reason}", path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration value outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
