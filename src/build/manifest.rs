// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk site layout: the cross-reference manifest and page files.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::tree::Node;

/// Manifest file at the root of a built site.
pub const XREF_FILENAME: &str = "myst.xref.json";

#[derive(Deserialize, Clone, Debug)]
pub struct SiteXref {
    #[serde(default)]
    pub references: Vec<XrefReference>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct XrefReference {
    pub kind: String,
    /// Page file path, relative to the site root.
    #[serde(default)]
    pub data: Option<String>,
}

impl SiteXref {
    pub fn load(site_dir: &Path) -> Result<Self> {
        read_json(&site_dir.join(XREF_FILENAME))
    }

    /// Page files named by `kind == "page"` references, in manifest order.
    pub fn page_paths(&self, site_dir: &Path) -> Vec<PathBuf> {
        self.references
            .iter()
            .filter(|r| r.kind == "page")
            .filter_map(|r| r.data.as_deref())
            .map(|data| site_dir.join(data.trim_start_matches('/')))
            .collect()
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: Option<String>,
}

/// One page file: its slug, frontmatter and parsed tree.
#[derive(Deserialize, Clone, Debug)]
pub struct PageData {
    pub slug: String,
    #[serde(default)]
    pub frontmatter: Frontmatter,
    pub mdast: Node,
}

impl PageData {
    pub fn load(path: &Path) -> Result<Self> {
        let page: PageData = read_json(path)?;
        if page.slug.is_empty() {
            return Err(Error::InvalidDocument {
                path: path.to_path_buf(),
                reason: "empty slug".to_string(),
            });
        }
        Ok(page)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
