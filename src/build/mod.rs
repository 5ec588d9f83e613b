// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From a built site on disk to index records.
//!
//! ```text
//! page tree ─► prune ─► sectionize ─┬─► heading corpus (joined with " ")
//!                                   ├─► body corpus    (no separator)
//!                                   └─► breadcrumbs ─► heading + content records
//! ```

pub mod corpus;
pub mod document;
pub mod hierarchy;
pub mod manifest;
pub mod parallel;
pub mod records;
pub mod sections;

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::types::SearchRecord;

pub use corpus::{bisect_left, bisect_left_by, build_corpus};
pub use document::{records_from_documents, SearchDocument};
pub use hierarchy::{build_hierarchies, build_hierarchy};
pub use manifest::{PageData, SiteXref, XREF_FILENAME};
pub use records::{emit_records, record_id};
pub use sections::to_sectioned_parts;

/// Load and sectionize every page listed in the site's xref manifest.
///
/// Pages that fail to load are skipped with a warning. A missing or
/// malformed manifest is an error.
pub fn load_site(site_dir: &Path, config: &SearchConfig) -> Result<Vec<SearchDocument>> {
    let paths = SiteXref::load(site_dir)?.page_paths(site_dir);
    let docs = parallel::load_pages(&paths, config);
    tracing::debug!(pages = paths.len(), loaded = docs.len(), "loaded site");
    Ok(docs)
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// [`load_site`] with a progress bar on stderr.
#[cfg(feature = "parallel")]
pub fn load_site_with_progress(
    site_dir: &Path,
    config: &SearchConfig,
) -> Result<Vec<SearchDocument>> {
    let paths = SiteXref::load(site_dir)?.page_paths(site_dir);

    let progress = ProgressBar::new(paths.len() as u64);
    progress.set_style(create_progress_style());
    progress.set_prefix("Loading");
    progress.set_message("pages...");

    let docs = parallel::load_pages_with_progress(&paths, config, &progress);
    progress.finish_with_message(format!("loaded {} pages", docs.len()));
    Ok(docs)
}

#[cfg(not(feature = "parallel"))]
pub fn load_site_with_progress(
    site_dir: &Path,
    config: &SearchConfig,
) -> Result<Vec<SearchDocument>> {
    load_site(site_dir, config)
}

/// Write records as a JSON array.
pub fn write_records(path: &Path, records: &[SearchRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read records written by [`write_records`].
pub fn read_records(path: &Path) -> Result<Vec<SearchRecord>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
