// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turn a sectionized page into index records.
//!
//! Each section yields a heading record at position `2i` and a content record
//! at `2i + 1`. Both carry the section's breadcrumb and URL.

use crate::contracts::check_positions_unique;
use crate::error::{Error, Result};
use crate::types::{Corpus, HeadingLevel, RecordKind, SearchRecord, Section};

use super::hierarchy::{build_hierarchies, required_heading};

/// Record id: unique per record across a site.
pub fn record_id(location: &str, position: usize) -> String {
    format!("{}#{}", location, position)
}

/// Section URL: the page location plus the heading anchor, if any.
pub fn section_url(location: &str, html_id: Option<&str>) -> String {
    match html_id {
        Some(id) => format!("{}#{}", location, id),
        None => location.to_string(),
    }
}

/// Emit the heading and content records for every section of one page.
///
/// Content text is read from `body`, the body corpus built over `sections`
/// without a separator. Every section after the first must have a heading.
pub fn emit_records(
    title: Option<&str>,
    location: &str,
    sections: &[Section],
    body: &Corpus,
) -> Result<Vec<SearchRecord>> {
    let hierarchies = build_hierarchies(title, sections)?;
    let texts = body.section_texts(None)?;
    let mut records = Vec::with_capacity(sections.len() * 2);

    for (index, hierarchy) in hierarchies.into_iter().enumerate() {
        let heading = if index == 0 {
            sections[0].heading.as_ref()
        } else {
            Some(required_heading(sections, index)?)
        };
        let level = heading.map_or(HeadingLevel::Lvl1, |h| h.depth);
        let url = section_url(location, heading.and_then(|h| h.html_id.as_deref()));
        let content = texts
            .get(index)
            .ok_or(Error::SectionOutOfRange {
                index,
                len: texts.len(),
            })?
            .to_string();

        let position = 2 * index;
        records.push(SearchRecord {
            id: record_id(location, position),
            kind: RecordKind::heading(level),
            hierarchy: hierarchy.clone(),
            url: url.clone(),
            position,
        });
        records.push(SearchRecord {
            id: record_id(location, position + 1),
            kind: RecordKind::Content { content },
            hierarchy,
            url,
            position: position + 1,
        });
    }

    check_positions_unique(&records);
    Ok(records)
}
