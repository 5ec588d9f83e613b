// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::tree::prune;
use crate::types::{Corpus, SearchRecord, Section};

use super::corpus::build_corpus;
use super::manifest::PageData;
use super::records::emit_records;
use super::sections::to_sectioned_parts;

/// A page ready for indexing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchDocument {
    pub title: Option<String>,
    pub slug: String,
    pub location: String,
    pub sections: Vec<Section>,
    /// Heading texts, one slot per section.
    pub heading_corpus: Corpus,
    /// Body parts, one slot per section, no separator.
    pub body_corpus: Corpus,
    /// CRC32 of the body text, for spotting changed pages between builds.
    pub digest: u32,
}

impl SearchDocument {
    /// Prune, sectionize and flatten one page.
    pub fn from_page(page: PageData, config: &SearchConfig) -> Result<Self> {
        let PageData {
            slug,
            frontmatter,
            mut mdast,
        } = page;
        if frontmatter.title.is_none() {
            tracing::warn!(slug = %slug, "page has no title, breadcrumbs will lack lvl1");
        }
        prune(&mut mdast, &config.pruned_node_types);

        let sections = to_sectioned_parts(&mdast)?;
        let headings: Vec<[&str; 1]> = sections
            .iter()
            .map(|s| [s.heading.as_ref().map_or("", |h| h.text.as_str())])
            .collect();
        let heading_corpus = build_corpus(&headings, Some(config.heading_separator.as_str()));
        let parts: Vec<&[String]> = sections.iter().map(|s| s.parts.as_slice()).collect();
        let body_corpus = build_corpus(&parts, None);

        Ok(Self {
            title: frontmatter.title,
            location: config.location(&slug),
            slug,
            digest: crc32fast::hash(body_corpus.text.as_bytes()),
            sections,
            heading_corpus,
            body_corpus,
        })
    }

    /// Heading and content records for every section.
    pub fn records(&self) -> Result<Vec<SearchRecord>> {
        emit_records(
            self.title.as_deref(),
            &self.location,
            &self.sections,
            &self.body_corpus,
        )
    }
}

/// Records of every document, in document order.
pub fn records_from_documents(docs: &[SearchDocument]) -> Result<Vec<SearchRecord>> {
    let mut records = Vec::new();
    for doc in docs {
        records.extend(doc.records()?);
    }
    Ok(records)
}
