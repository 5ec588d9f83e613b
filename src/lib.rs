// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Section-aware search records and multi-criteria ranking for documentation
//! sites.
//!
//! Pages are split at their headings into sections. Each section becomes a
//! heading record and a content record carrying the breadcrumb of enclosing
//! headings. At query time, per-term hits from any [`TermIndex`] are AND-merged
//! and sorted by typos, matched attribute, record level, match position and
//! on-page appearance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    tree.rs   │────▶│    build/    │────▶│   types.rs   │
//! │ (Node, walk, │     │ (sections,   │     │ (SearchRecord│
//! │  prune)      │     │  corpus,     │     │  Ranking)    │
//! └──────────────┘     │  hierarchy,  │     └──────┬───────┘
//!                      │  records)    │            │
//!                      └──────────────┘            ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ highlight.rs │◀────│   scoring/   │◀────│   search/    │
//! │  (snippets)  │     │ (criteria,   │     │ (tokenizer,  │
//! └──────────────┘     │  rank_results│     │  index,      │
//!                      └──────────────┘     │  combine)    │
//!                                           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use sectra::{load_site, records_from_documents, search, DefaultTokenizer, MemoryIndex, SearchConfig};
//!
//! let config = SearchConfig::default();
//! let docs = load_site(Path::new("_build/site"), &config)?;
//! let records = records_from_documents(&docs)?;
//! let index = MemoryIndex::new(records, &DefaultTokenizer, &config);
//! let ranked = search(&index, &DefaultTokenizer, "delta v", config.proximity_bound);
//! ```

pub mod build;
pub mod config;
pub mod contracts;
mod error;
pub mod fuzzy;
mod highlight;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod tree;
mod types;
mod utils;

pub use build::{
    build_corpus, build_hierarchies, build_hierarchy, emit_records, load_site, read_records,
    records_from_documents, to_sectioned_parts, write_records, SearchDocument,
};
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use highlight::{any_word_pattern, highlight, SNIPPET_TOKENS};
pub use scoring::{compare_rankings, compute_ranking, rank_results};
pub use search::{
    combine_results, search, unique_terms, DefaultTokenizer, MemoryIndex, TermIndex, Tokenizer,
};
pub use tree::{Node, Visit, Visitor};
pub use types::{
    Corpus, DocumentHierarchy, Field, HeadingInfo, HeadingLevel, Query, RankedSearchResult,
    Ranking, RawHit, RecordKind, SearchRecord, SearchResult, Section, TokenMatches,
    SEARCH_ATTRIBUTES_ORDERED,
};
pub use utils::normalize;
