// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Split a document tree into sections at heading boundaries.
//!
//! One pass over the tree. A heading opens a new section and its children
//! are skipped (its text is captured whole with [`to_text`]); literal nodes
//! append to the current section; leaving a paragraph appends `"\n"`.
//! A page with `k` headings always yields `k + 1` sections.

use crate::error::{Error, Result};
use crate::tree::{to_text, walk, Node, Visit, Visitor};
use crate::types::{HeadingInfo, HeadingLevel, Section};

/// Paragraph break written into a section's parts.
pub const PARAGRAPH_SEPARATOR: &str = "\n";

struct Sectionizer {
    sections: Vec<Section>,
}

impl Sectionizer {
    /// The open section. The headingless lead is seeded before the walk, so
    /// there is always one.
    fn current(&mut self) -> Result<&mut Section> {
        self.sections
            .last_mut()
            .ok_or(Error::SectionOutOfRange { index: 0, len: 0 })
    }
}

impl Visitor for Sectionizer {
    type Error = Error;

    fn visit(&mut self, node: &Node) -> Result<Visit> {
        if node.is("heading") {
            let depth = HeadingLevel::from_depth(node.depth.unwrap_or(0))?;
            self.sections.push(Section {
                heading: Some(HeadingInfo {
                    text: to_text(node),
                    depth,
                    html_id: node.anchor().map(str::to_string),
                }),
                parts: Vec::new(),
            });
            return Ok(Visit::SkipChildren);
        }
        if let Some(value) = node.value.as_deref().filter(|v| !v.is_empty()) {
            self.current()?.parts.push(value.to_string());
        }
        Ok(Visit::Continue)
    }

    fn depart(&mut self, node: &Node) -> Result<()> {
        if node.is("paragraph") {
            self.current()?.parts.push(PARAGRAPH_SEPARATOR.to_string());
        }
        Ok(())
    }
}

/// Sectionize a (pruned) document tree.
///
/// The first section never has a heading. Fails on a heading whose depth is
/// missing or outside `1..=6`.
pub fn to_sectioned_parts(root: &Node) -> Result<Vec<Section>> {
    let mut sectionizer = Sectionizer {
        sections: vec![Section::default()],
    };
    walk(root, &mut sectionizer)?;
    Ok(sectionizer.sections)
}
