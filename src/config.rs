// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index and search settings.
//!
//! Every field has a default, so an empty JSON object is a valid config file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Node types removed before sectionizing: code and title-like blocks.
pub const DEFAULT_PRUNED_NODE_TYPES: [&str; 5] =
    ["code", "inlineCode", "myst", "admonitionTitle", "cardTitle"];

/// Page slugs that live at the site root.
pub const DEFAULT_INDEX_SLUGS: [&str; 2] = ["index", "main"];

pub const DEFAULT_PROXIMITY_BOUND: usize = 8;

/// Hard ceiling on fuzzy edits, whatever the term length.
pub const MAX_FUZZY_EDITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum edit distance as a fraction of the term length (rounded).
    pub fuzzy: f64,
    /// Match vocabulary tokens that start with the term.
    pub prefix: bool,
    /// Cap on the proximity score.
    pub proximity_bound: usize,
    /// Join string for the heading corpus.
    pub heading_separator: String,
    pub pruned_node_types: Vec<String>,
    pub index_slugs: Vec<String>,
    /// Prefix for every page location.
    pub base_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy: 0.2,
            prefix: true,
            proximity_bound: DEFAULT_PROXIMITY_BOUND,
            heading_separator: " ".to_string(),
            pruned_node_types: DEFAULT_PRUNED_NODE_TYPES.map(String::from).to_vec(),
            index_slugs: DEFAULT_INDEX_SLUGS.map(String::from).to_vec(),
            base_url: String::new(),
        }
    }
}

impl SearchConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig =
            serde_json::from_str(&content).map_err(|source| Error::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy) {
            return Err(Error::InvalidConfig(format!(
                "fuzzy must be within [0, 1], got {}",
                self.fuzzy
            )));
        }
        if self.proximity_bound == 0 {
            return Err(Error::InvalidConfig(
                "proximity_bound must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Public location of a page: `base_url/slug`, or `base_url/` for index pages.
    pub fn location(&self, slug: &str) -> String {
        let slug = if self.index_slugs.iter().any(|s| s == slug) {
            ""
        } else {
            slug
        };
        format!("{}/{}", self.base_url, slug)
    }

    /// Largest edit distance allowed for a term of `term_chars` characters.
    pub fn max_edits(&self, term_chars: usize) -> usize {
        ((self.fuzzy * term_chars as f64).round() as usize).min(MAX_FUZZY_EDITS)
    }
}
