// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their order.
//!
//! The ranking is lexicographic over a small tuple, not a weighted sum. A
//! literal hit always beats a typo, and a heading-field hit always beats a
//! body hit with the same typo count. Numeric weights only separate record
//! types within one attribute.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::*;
