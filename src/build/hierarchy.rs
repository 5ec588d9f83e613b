// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Breadcrumb trails for sections.
//!
//! For a target section, scan backward toward the top of the page and keep
//! every heading shallower than anything seen so far. The result is the
//! nearest enclosing heading at each level, not just the previous heading.

use crate::contracts::check_hierarchy_monotone;
use crate::error::{Error, Result};
use crate::types::{DocumentHierarchy, HeadingInfo, HeadingLevel, Section};

/// Compute the breadcrumb for `sections[index]`.
///
/// `lvl1` starts as the page title (absent when the page has none). A
/// depth-1 heading inside the body encloses every section after it, so it
/// takes `lvl1` for those sections and closes the trail. Section 0 is the
/// headingless lead and is never scanned.
pub fn build_hierarchy(
    title: Option<&str>,
    sections: &[Section],
    index: usize,
) -> Result<DocumentHierarchy> {
    if index >= sections.len() {
        return Err(Error::SectionOutOfRange {
            index,
            len: sections.len(),
        });
    }

    let mut hierarchy = DocumentHierarchy {
        lvl1: title.map(str::to_string),
        ..Default::default()
    };
    let mut origins = [None; 6];

    // Deeper than any real heading
    let mut current_depth = u8::MAX;
    for i in (1..=index).rev() {
        let Some(heading) = &sections[i].heading else {
            continue;
        };
        let depth = heading.depth.depth();
        if depth >= current_depth {
            continue;
        }
        current_depth = depth;
        hierarchy.set(heading.depth, heading.text.clone());
        origins[usize::from(depth - 1)] = Some(i);
        if heading.depth == HeadingLevel::Lvl1 {
            break;
        }
    }

    check_hierarchy_monotone(&origins);
    Ok(hierarchy)
}

/// Breadcrumbs for every section of a page, in section order.
pub fn build_hierarchies(
    title: Option<&str>,
    sections: &[Section],
) -> Result<Vec<DocumentHierarchy>> {
    (0..sections.len())
        .map(|index| build_hierarchy(title, sections, index))
        .collect()
}

/// Heading of a section that must have one.
pub fn required_heading(sections: &[Section], index: usize) -> Result<&HeadingInfo> {
    let section = sections.get(index).ok_or(Error::SectionOutOfRange {
        index,
        len: sections.len(),
    })?;
    section
        .heading
        .as_ref()
        .ok_or(Error::MissingHeading { index })
}
