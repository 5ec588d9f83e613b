// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so pairs that differ
//! in length by more than the threshold never reach the O(nm) DP. Inside the
//! DP, a row whose minimum already exceeds the threshold ends the search.

/// Edit distance between `a` and `b`, if it is at most `max`.
///
/// Counts characters, not bytes.
pub fn bounded_levenshtein(a: &str, b: &str, max: usize) -> Option<usize> {
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a.chars().count();
    let b_len = b_chars.len();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut row: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(substitution);
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return None;
        }
    }

    Some(row[b_len]).filter(|&distance| distance <= max)
}

/// Are these strings within `max` edits of each other?
#[inline]
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_levenshtein(a, b, max).is_some()
}
