// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo tolerance for the in-memory index: bounded edit distance.

mod levenshtein;

pub use levenshtein::*;
