// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel page loading.
//!
//! Reading page JSON and sectionizing it is independent per page, so pages
//! are processed with `par_iter()`. Output keeps manifest order regardless of
//! which worker finished first. A page that fails to load is logged and
//! dropped; the rest of the site still builds.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::path::{Path, PathBuf};
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::config::SearchConfig;
use crate::error::Result;

use super::{PageData, SearchDocument};

fn load_one(path: &Path, config: &SearchConfig) -> Result<SearchDocument> {
    let page = PageData::load(path)?;
    let doc = SearchDocument::from_page(page, config)?;
    tracing::debug!(
        slug = %doc.slug,
        sections = doc.sections.len(),
        heading_chars = doc.heading_corpus.char_len(),
        body_chars = doc.body_corpus.char_len(),
        "loaded page"
    );
    Ok(doc)
}

fn keep_loaded(path: &Path, result: Result<SearchDocument>) -> Option<SearchDocument> {
    match result {
        Ok(doc) => Some(doc),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping page");
            None
        }
    }
}

/// Load every page, skipping (and logging) the ones that fail.
#[cfg(feature = "parallel")]
pub fn load_pages(paths: &[PathBuf], config: &SearchConfig) -> Vec<SearchDocument> {
    paths
        .par_iter()
        .map(|path| keep_loaded(path, load_one(path, config)))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn load_pages(paths: &[PathBuf], config: &SearchConfig) -> Vec<SearchDocument> {
    paths
        .iter()
        .filter_map(|path| keep_loaded(path, load_one(path, config)))
        .collect()
}

/// [`load_pages`] with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_pages_with_progress(
    paths: &[PathBuf],
    config: &SearchConfig,
    progress: &ProgressBar,
) -> Vec<SearchDocument> {
    let counter = AtomicUsize::new(0);
    let total = paths.len();

    paths
        .par_iter()
        .map(|path| {
            let doc = keep_loaded(path, load_one(path, config));

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count.is_multiple_of(10) || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            doc
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}
