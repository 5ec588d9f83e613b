// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flatten section parts into one searchable string with offset bookkeeping.
//!
//! The corpus keeps, for every section, the character offset just past its
//! text (`stops`). Any offset can be mapped back to its section with a
//! binary search over `stops`.
//!
//! ```text
//! sections:  ["Intro"]  []   ["Body", "\n"]
//! join " ":   Intro␣             Body\n      (no separator after an empty section)
//! text:      "Intro Body\n"
//! stops:     [5, 6, 11]
//! ```

use std::ops::Range;

use crate::contracts::check_corpus_well_formed;
use crate::error::{Error, Result};
use crate::types::Corpus;
use crate::utils::char_slice;

/// Build a corpus from one part-list per section.
///
/// A `separator` is written between sections, except after the last section
/// and after sections that contributed no text. It sits between two
/// sections and belongs to neither: `stops[i]` is recorded before it.
pub fn build_corpus<T, P>(sections: &[T], separator: Option<&str>) -> Corpus
where
    T: AsRef<[P]>,
    P: AsRef<str>,
{
    let separator = separator.filter(|s| !s.is_empty());
    let last = sections.len().saturating_sub(1);

    let mut text = String::new();
    let mut length = 0usize;
    let mut stops = Vec::with_capacity(sections.len());

    for (index, parts) in sections.iter().enumerate() {
        let start = length;
        for part in parts.as_ref() {
            let part = part.as_ref();
            text.push_str(part);
            length += part.chars().count();
        }
        stops.push(length);

        if let Some(separator) = separator {
            if length != start && index != last {
                text.push_str(separator);
                length += separator.chars().count();
            }
        }
    }

    let corpus = Corpus { text, stops };
    check_corpus_well_formed(&corpus, sections.len());
    corpus
}

/// Leftmost index whose element is not "less" than the probe.
///
/// `is_less(x)` must be monotone over `items` (true, then false). This is the
/// classic `bisect_left`, with the comparison supplied by the caller.
#[inline]
pub fn bisect_left_by<T, F>(items: &[T], is_less: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    items.partition_point(is_less)
}

/// `bisect_left` over a sorted slice.
#[inline]
pub fn bisect_left<T: Ord>(items: &[T], value: &T) -> usize {
    bisect_left_by(items, |item| item < value)
}

impl Corpus {
    /// Length of `text` in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Section owning a boundary offset: the leftmost `i` with `stops[i] >= offset`.
    ///
    /// Offsets count characters consumed, so the boundary after the character
    /// at index `c` is `c + 1`. Use [`Corpus::section_of_char`] for indices.
    pub fn section_at_offset(&self, offset: usize) -> Result<usize> {
        let len = self.char_len();
        if offset > len {
            return Err(Error::OffsetOutOfRange { offset, len });
        }
        let index = bisect_left(&self.stops, &offset);
        if index >= self.stops.len() {
            return Err(Error::SectionOutOfRange {
                index,
                len: self.stops.len(),
            });
        }
        Ok(index)
    }

    /// Section containing the character at `index`.
    ///
    /// Separator characters resolve to the section that follows them.
    pub fn section_of_char(&self, index: usize) -> Result<usize> {
        let len = self.char_len();
        if index >= len {
            return Err(Error::OffsetOutOfRange { offset: index, len });
        }
        self.section_at_offset(index + 1)
    }

    /// Character range of every section's own text.
    ///
    /// `separator` must be the one the corpus was built with.
    pub fn section_ranges(&self, separator: Option<&str>) -> Vec<Range<usize>> {
        let separator_len = separator.map_or(0, |s| s.chars().count());
        let last = self.stops.len().saturating_sub(1);
        let mut start = 0;
        let mut ranges = Vec::with_capacity(self.stops.len());
        for (index, &stop) in self.stops.iter().enumerate() {
            ranges.push(start..stop);
            start = if stop != start && index != last {
                stop + separator_len
            } else {
                stop
            };
        }
        ranges
    }

    /// Text contributed by section `index`.
    pub fn section_text(&self, index: usize, separator: Option<&str>) -> Result<&str> {
        let ranges = self.section_ranges(separator);
        let range = ranges.get(index).cloned().ok_or(Error::SectionOutOfRange {
            index,
            len: ranges.len(),
        })?;
        Ok(char_slice(&self.text, range))
    }

    /// Text of every section, in section order, from one pass over the corpus.
    pub fn section_texts(&self, separator: Option<&str>) -> Result<Vec<&str>> {
        let bytes: Vec<usize> = self
            .text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(self.text.len()))
            .collect();
        let len = bytes.len() - 1;
        self.section_ranges(separator)
            .into_iter()
            .map(|range| match (bytes.get(range.start), bytes.get(range.end)) {
                (Some(&start), Some(&end)) if start <= end => Ok(&self.text[start..end]),
                _ => Err(Error::OffsetOutOfRange {
                    offset: range.end,
                    len,
                }),
            })
            .collect()
    }
}
